/// AST (Abstract Syntax Tree) module
/// Contains the node types the parser builds
///
/// Submodules:
/// - expressions: constant, identifier, string and binary-operator nodes
/// - statements: statement nodes and the linked program sequence
pub mod expressions;
pub mod statements;
