use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Binary operator tag carried by `Expr::Binary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Equals => Some(BinaryOp::Eq),
            TokenKind::NotEquals => Some(BinaryOp::NotEq),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEquals => Some(BinaryOp::LessEq),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEquals => Some(BinaryOp::GreaterEq),
            _ => None,
        }
    }

    pub fn is_relational(&self) -> bool {
        !matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression node.
///
/// Identifier leaves hold the ordinal assigned by the token source's
/// identifier table, not a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(i64),
    Id(u32),
    Str(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Drop for Expr {
    // Long `+`/`*` chains build left-deep trees; detach children onto a
    // worklist so dropping never recurses.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Binary { left, right, .. } = expr {
        pending.push(std::mem::replace(&mut **left, Expr::Const(0)));
        pending.push(std::mem::replace(&mut **right, Expr::Const(0)));
    }
}

/// Fully parenthesized rendering, e.g. `((1 - 2) - 3)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Id(ordinal) => write!(f, "#{}", ordinal),
            Expr::Str(value) => write!(f, "{:?}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
