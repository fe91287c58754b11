use crate::{
    ast::{
        ast::{CompoundAssignOp, LoopControl},
        expressions::Exp,
        statements::{Block, FunctionDeclaration, Stmt},
    },
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Binop, Bracket, Keyword, Symbol, Token, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a statement")),
    }
}

/// Parses separator-delimited statements until `terminator` or the end of input.
///
/// Leading and trailing separators are skipped; two statements with no
/// separator between them are an error.
pub fn parse_stmt_sequence(
    parser: &mut Parser,
    terminator: Option<TokenKind>,
) -> Result<Vec<Stmt>, ParseError> {
    let mut statements = vec![];
    let at_terminator =
        |parser: &Parser| terminator.is_some_and(|terminator| parser.at(terminator));

    parser.skip_separators();
    while parser.has_tokens() && !at_terminator(parser) {
        statements.push(parse_stmt(parser)?);

        let separated = parser.skip_separators();
        if !separated && parser.has_tokens() && !at_terminator(parser) {
            let token = parser
                .current_token()
                .map(Token::to_string)
                .unwrap_or_default();
            return Err(ParseError::new(
                ParseErrorImpl::MissingSeparator { token },
                parser.get_position(),
            ));
        }
    }

    Ok(statements)
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, ParseError> {
    parser.expect(TokenKind::Bracket(Bracket::LCurly))?;
    let statements = parse_stmt_sequence(parser, Some(TokenKind::Bracket(Bracket::RCurly)))?;
    parser.expect(TokenKind::Bracket(Bracket::RCurly))?;

    Ok(Block::new(statements))
}

/// A loop or branch body: a braced block, or a single statement wrapped in one.
fn parse_body(parser: &mut Parser) -> Result<Block, ParseError> {
    parser.skip_line_breaks();
    if parser.at(TokenKind::Bracket(Bracket::LCurly)) {
        parse_block(parser)
    } else {
        Ok(Block::new(vec![parse_stmt(parser)?]))
    }
}

fn at_statement_end(parser: &Parser) -> bool {
    match parser.current_token() {
        None => true,
        Some(token) => token.is_separator() || *token == Token::Bracket(Bracket::RCurly),
    }
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `var a`, `val a: Int = 1`, ...
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let read_only = parser.advance()? == Token::Keyword(Keyword::Val);

    let variable = match parser.current_token() {
        Some(Token::Variable(_)) => parser.expect_identifier()?,
        _ => {
            return Err(parser.unexpected("expected identifier during variable declaration"))
        }
    };

    let ty = if parser.at(TokenKind::Symbol(Symbol::Colon)) {
        parser.advance()?;
        Some(parse_type(parser)?)
    } else {
        None
    };

    if parser.at(TokenKind::Binop(Binop::Equal)) {
        parser.advance()?;
        parser.skip_line_breaks();
        let value = parse_expr(parser, BindingPower::Default)?;

        return Ok(Stmt::Assign {
            variable,
            value,
            ty,
            is_new: true,
            read_only,
        });
    }

    if !at_statement_end(parser) {
        return Err(parser.unexpected("expected `=` or the end of the declaration"));
    }

    Ok(Stmt::VariableDeclare {
        variable,
        ty,
        read_only,
    })
}

fn compound_assign_op(kind: TokenKind) -> Option<CompoundAssignOp> {
    match kind {
        TokenKind::Binop(Binop::PlusEqual) => Some(CompoundAssignOp::PlusEqual),
        TokenKind::Binop(Binop::MinusEqual) => Some(CompoundAssignOp::MinusEqual),
        TokenKind::Binop(Binop::MultiplyEqual) => Some(CompoundAssignOp::MultiplyEqual),
        TokenKind::Binop(Binop::DivideEqual) => Some(CompoundAssignOp::DivideEqual),
        _ => None,
    }
}

/// Statements starting with an identifier: `a = e`, `a += e`, `f(...)`, `a++`.
pub fn parse_symbol_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let next = parser.peek_kind(1);

    if next == Some(TokenKind::Binop(Binop::Equal)) {
        let variable = parser.expect_identifier()?;
        parser.advance()?;
        parser.skip_line_breaks();
        let value = parse_expr(parser, BindingPower::Default)?;

        return Ok(Stmt::assign(&variable, value));
    }

    if let Some(op) = next.and_then(compound_assign_op) {
        let variable = parser.expect_identifier()?;
        parser.advance()?;
        parser.skip_line_breaks();
        let value = parse_expr(parser, BindingPower::Default)?;

        return Ok(Stmt::CompoundAssign {
            variable,
            op,
            value,
        });
    }

    parse_expression_stmt(parser)
}

/// An expression in statement position; only calls and `++`/`--` qualify.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let position = parser.get_position();
    let start = parser
        .current_token()
        .map(Token::to_string)
        .unwrap_or_default();

    match parse_expr(parser, BindingPower::Default)? {
        Exp::Call { callee, arguments } => Ok(Stmt::FunctionCall { callee, arguments }),
        Exp::SelfOperation {
            variable,
            op,
            prefix,
        } => Ok(Stmt::SelfOperation {
            variable,
            op,
            prefix,
        }),
        _ => Err(ParseError::new(
            ParseErrorImpl::UnexpectedTokenDetailed {
                token: start,
                message: String::from("expression cannot be used as a statement"),
            },
            position,
        )),
    }
}

/// `if (cond) body [else body]`; `else` may sit on a following line.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::If))?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;

    let then_block = parse_body(parser)?;

    let before_else = parser.get_position();
    parser.skip_line_breaks();
    let else_block = if parser.at(TokenKind::Keyword(Keyword::Else)) {
        parser.advance()?;
        Some(parse_body(parser)?)
    } else {
        parser.set_position(before_else);
        None
    };

    Ok(Stmt::If {
        condition,
        then_block,
        else_block,
    })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::For))?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let variable = parser.expect_identifier()?;
    parser.expect(TokenKind::Keyword(Keyword::In))?;
    let source = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;

    let body = parse_body(parser)?;

    Ok(Stmt::For {
        variable,
        source,
        body,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::While))?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;

    let body = parse_body(parser)?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_loop_control_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    match parser.advance()? {
        Token::Keyword(Keyword::Continue) => Ok(Stmt::LoopControl(LoopControl::Continue)),
        _ => Ok(Stmt::LoopControl(LoopControl::Break)),
    }
}

/// `fun name(a: T, b: U): R { ... }`
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::Fun))?;
    let name = parser.expect_identifier()?;

    parser.expect(TokenKind::Bracket(Bracket::LParen))?;

    let mut parameters = Vec::new();
    while !parser.at(TokenKind::Bracket(Bracket::RParen)) {
        if !parameters.is_empty() {
            parser.expect(TokenKind::Symbol(Symbol::Comma))?;
        }
        let parameter = parser.expect_identifier()?;
        parser.expect(TokenKind::Symbol(Symbol::Colon))?;
        let ty = parse_type(parser)?;
        parameters.push((parameter, ty));
    }

    parser.expect(TokenKind::Bracket(Bracket::RParen))?;
    parser.expect(TokenKind::Symbol(Symbol::Colon))?;
    let return_type = parse_type(parser)?;

    parser.skip_line_breaks();
    let body = parse_block(parser)?;

    Ok(Stmt::FunctionDeclare(FunctionDeclaration {
        name,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::Return))?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Return(value))
}

/// `print(e)` / `println(e)`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let keyword = parser.advance()?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    parser.skip_line_breaks();
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_line_breaks();
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;

    match keyword {
        Token::Keyword(Keyword::Println) => Ok(Stmt::Println(value)),
        _ => Ok(Stmt::Print(value)),
    }
}
