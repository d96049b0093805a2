//! Expression grammar.
//!
//! Precedence is encoded by layering, loosest first:
//!
//! ```text
//! expr       := arithmetic [ relop arithmetic ]
//! arithmetic := term { ("+" | "-") term }
//! term       := primary { ("*" | "/") primary }
//! primary    := INT | ID | "(" expr ")"
//! ```
//!
//! `+ - * /` associate to the left. A relational operator appears at most
//! once per expression. Parentheses nest at most `MAX_NESTING` deep.

use crate::{
    ast::expressions::{BinaryOp, Expr},
    errors::errors::Error,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::parser::Parser;

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let left = parse_arithmetic_expr(parser)?;

    match BinaryOp::from_token(parser.current_token_kind()) {
        Some(op) if op.is_relational() => {
            parser.consume()?;
            let right = parse_arithmetic_expr(parser)?;

            Ok(Expr::binary(op, left, right))
        }
        _ => Ok(left),
    }
}

pub fn parse_arithmetic_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let mut left = parse_term_expr(parser)?;

    while let Some(op @ (BinaryOp::Add | BinaryOp::Sub)) =
        BinaryOp::from_token(parser.current_token_kind())
    {
        parser.consume()?;
        let right = parse_term_expr(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

pub fn parse_term_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while let Some(op @ (BinaryOp::Mul | BinaryOp::Div)) =
        BinaryOp::from_token(parser.current_token_kind())
    {
        parser.consume()?;
        let right = parse_primary_expr(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

pub fn parse_primary_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parser.source().int_value();
            parser.consume()?;
            Ok(Expr::Const(value))
        }
        TokenKind::Identifier => {
            let ordinal = parser.source().identifier_ordinal();
            parser.consume()?;
            Ok(Expr::Id(ordinal))
        }
        TokenKind::OpenParen => parser.nested(|parser| {
            parser.consume()?;
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expr)
        }),
        _ => Err(parser.syntax_error(vec![
            TokenKind::Number,
            TokenKind::Identifier,
            TokenKind::OpenParen,
        ])),
    }
}
