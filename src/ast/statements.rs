use std::fmt::Debug;

use super::expressions::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `print(...)`; the argument is an expression or a string leaf.
    Write(Expr),
}

/// A statement linked to the statement that follows it.
pub struct StmtNode {
    pub kind: StmtKind,
    pub next: Option<Box<StmtNode>>,
}

impl StmtNode {
    pub fn new(kind: StmtKind) -> Self {
        StmtNode { kind, next: None }
    }
}

impl Debug for StmtNode {
    // The successor is left out; `Program` lists the whole sequence.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StmtNode").field("kind", &self.kind).finish()
    }
}

impl Drop for StmtNode {
    // Unlink iteratively so long sequences do not recurse on drop.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// The retained tree of a parsed program: the head of a singly linked
/// statement sequence in source order.
#[derive(Default)]
pub struct Program {
    pub head: Option<Box<StmtNode>>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    next: Option<&'a StmtNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StmtNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a StmtNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
