//! Statement grammar.
//!
//! Only `print` produces a node. Every other construct is matched in full,
//! including nested bodies, and then dropped.

use tracing::{debug, trace};

use crate::{
    ast::{
        expressions::Expr,
        statements::{StmtKind, StmtNode},
    },
    errors::errors::Error,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

/// Parses statements while the current token starts one, linking the
/// retained nodes in source order. Returns the head of the sequence.
pub fn parse_stmt_sequence<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<Option<Box<StmtNode>>, Error> {
    let mut head = None;
    let mut tail = &mut head;
    let mut retained = 0;

    while parser.current_token_kind().starts_statement() {
        if let Some(node) = parse_stmt(parser)? {
            tail = &mut tail.insert(Box::new(node)).next;
            retained += 1;
        }
    }

    debug!(retained, "parsed statement sequence");

    Ok(head)
}

/// Dispatches on the current token. Returns `None` both for constructs
/// that are not retained and when the current token starts no statement,
/// in which case nothing is consumed.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Option<StmtNode>, Error> {
    trace!(kind = %parser.current_token_kind(), "statement");

    match parser.current_token_kind() {
        TokenKind::Print => return parse_print_stmt(parser).map(Some),
        TokenKind::For => parse_for_stmt(parser)?,
        TokenKind::If => parse_if_stmt(parser)?,
        TokenKind::Fun => parse_fun_decl_stmt(parser)?,
        TokenKind::Var => parse_var_decl_stmt(parser)?,
        TokenKind::Identifier => parse_assign_or_call_stmt(parser)?,
        _ => {}
    }

    Ok(None)
}

// print ( STRING | expr ) ;
pub fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<StmtNode, Error> {
    parser.expect(TokenKind::Print)?;
    parser.expect(TokenKind::OpenParen)?;

    let value = if parser.current_token_kind() == TokenKind::String {
        let value = parser.source().string_value();
        parser.consume()?;
        Expr::Str(value)
    } else {
        parse_expr(parser)?
    };

    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtNode::new(StmtKind::Write(value)))
}

// for ( var-decl expr ; increment ) { body }
pub fn parse_for_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_var_decl_stmt(parser)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    parse_loop_increment(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    while parse_body_stmt(parser)? {}
    parser.expect(TokenKind::CloseCurly)
}

// ID ( "++" | "--" | "=" expr )
fn parse_loop_increment<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;

    match parser.current_token_kind() {
        TokenKind::PlusPlus | TokenKind::MinusMinus => parser.consume(),
        TokenKind::Assignment => {
            parser.consume()?;
            parse_expr(parser)?;
            Ok(())
        }
        _ => Err(parser.syntax_error(vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Assignment,
        ])),
    }
}

/// Parses one statement of a loop or function body. Returns `false`,
/// consuming nothing, when the current token starts none of them.
fn parse_body_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<bool, Error> {
    match parser.current_token_kind() {
        TokenKind::Print => {
            parse_print_stmt(parser)?;
        }
        TokenKind::If => parse_if_stmt(parser)?,
        TokenKind::Var => parse_var_decl_stmt(parser)?,
        TokenKind::Identifier => parse_assign_or_call_stmt(parser)?,
        _ => return Ok(false),
    }

    Ok(true)
}

// if ( expr ) { sequence } [ else { sequence } ]
pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.nested(parse_if_branches)
}

fn parse_if_branches<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    parse_stmt_sequence(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.consume()?;
        parser.expect(TokenKind::OpenCurly)?;
        parse_stmt_sequence(parser)?;
        parser.expect(TokenKind::CloseCurly)?;
    }

    Ok(())
}

// fun ID ( params ) { body [ return ( STRING | expr ) ; ] }
pub fn parse_fun_decl_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::Fun)?;
    parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;
    while parser.current_token_kind() == TokenKind::Identifier {
        parser.consume()?;
        expect_separator(parser)?;
    }
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;
    while parse_body_stmt(parser)? {}

    if parser.current_token_kind() == TokenKind::Return {
        parser.consume()?;

        if parser.current_token_kind() == TokenKind::String {
            parser.consume()?;
        } else {
            parse_expr(parser)?;
        }

        parser.expect(TokenKind::Semicolon)?;
    }

    parser.expect(TokenKind::CloseCurly)
}

// var ID = expr ;
pub fn parse_var_decl_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::Var)?;
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)
}

// ID ( "=" expr | "(" args ")" ) ;
pub fn parse_assign_or_call_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;

    match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.consume()?;
            parse_expr(parser)?;
        }
        TokenKind::OpenParen => {
            parser.consume()?;
            while matches!(
                parser.current_token_kind(),
                TokenKind::Identifier | TokenKind::Number | TokenKind::String
            ) {
                parser.consume()?;
                expect_separator(parser)?;
            }
            parser.expect(TokenKind::CloseParen)?;
        }
        _ => {
            return Err(parser.syntax_error(vec![TokenKind::Assignment, TokenKind::OpenParen]));
        }
    }

    parser.expect(TokenKind::Semicolon)
}

// Items of a parameter or argument list are separated by commas; a comma
// is required unless the list closes next.
fn expect_separator<S: TokenSource>(parser: &mut Parser<S>) -> Result<(), Error> {
    if parser.current_token_kind() != TokenKind::CloseParen {
        parser.expect(TokenKind::Comma)?;
    }

    Ok(())
}
