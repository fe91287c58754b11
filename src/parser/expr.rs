use crate::{
    ast::{
        ast::{ArithmeticOp, ComparisonOp, LogicalOp, SelfOp},
        expressions::{Exp, Lambda},
        types::Type,
    },
    errors::errors::{ParseError, ParseErrorImpl},
    lexer::tokens::{Binop, Bracket, Keyword, Symbol, Token, TokenKind, TypeName, Unop},
};

use super::{
    interpolation::parse_string_template, lookups::BindingPower, parser::Parser, types::parse_type,
};

/// Precedence-climbing loop: parse a prefix form, then fold in operators
/// that bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Exp, ParseError> {
    let token_kind = match parser.current_token_kind() {
        Some(kind) => kind,
        None => return Err(parser.unexpected("an expression")),
    };

    let nud = match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(nud) => nud,
        None => return Err(parser.unexpected("expected the start of an expression")),
    };

    let mut left = nud(parser)?;

    while let Some(token_kind) = parser.current_token_kind() {
        let token_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if token_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind).copied() {
            Some(led) => led,
            None => return Err(parser.unexpected("expected an operator")),
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    let position = parser.get_position();

    match parser.advance()? {
        Token::Int(value) => Ok(Exp::Int(value)),
        Token::Variable(name) => Ok(Exp::Variable(name)),
        Token::Str(literal) => Ok(Exp::Str(parse_string_template(&literal, position)?)),
        Token::Keyword(Keyword::True) => Ok(Exp::Boolean(true)),
        Token::Keyword(Keyword::False) => Ok(Exp::Boolean(false)),
        token => Err(ParseError::new(
            ParseErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            position,
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Exp,
    bp: BindingPower,
) -> Result<Exp, ParseError> {
    let position = parser.get_position();
    let operator_token = parser.advance()?;

    parser.skip_line_breaks();
    let right = parse_expr(parser, bp)?;

    let expression = match operator_token {
        Token::Binop(Binop::Plus) => Exp::arithmetic(left, ArithmeticOp::Plus, right),
        Token::Binop(Binop::Minus) => Exp::arithmetic(left, ArithmeticOp::Minus, right),
        Token::Binop(Binop::Multiply) => Exp::arithmetic(left, ArithmeticOp::Multiply, right),
        Token::Binop(Binop::Divide) => Exp::arithmetic(left, ArithmeticOp::Divide, right),
        Token::Binop(Binop::Mod) => Exp::arithmetic(left, ArithmeticOp::Modulo, right),
        Token::Binop(Binop::Greater) => Exp::comparison(left, ComparisonOp::Greater, right),
        Token::Binop(Binop::Less) => Exp::comparison(left, ComparisonOp::Less, right),
        Token::Binop(Binop::GreaterEqual) => {
            Exp::comparison(left, ComparisonOp::GreaterEqual, right)
        }
        Token::Binop(Binop::LessEqual) => Exp::comparison(left, ComparisonOp::LessEqual, right),
        Token::Binop(Binop::EqualEqual) => Exp::comparison(left, ComparisonOp::Equal, right),
        Token::Binop(Binop::NotEqual) => Exp::comparison(left, ComparisonOp::NotEqual, right),
        Token::Binop(Binop::And) => Exp::logical(left, LogicalOp::And, right),
        Token::Binop(Binop::Or) => Exp::logical(left, LogicalOp::Or, right),
        token => {
            return Err(ParseError::new(
                ParseErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from("not a binary operator"),
                },
                position,
            ))
        }
    };

    Ok(expression)
}

pub fn parse_range_expr(
    parser: &mut Parser,
    left: Exp,
    bp: BindingPower,
) -> Result<Exp, ParseError> {
    parser.expect(TokenKind::Symbol(Symbol::DotDot))?;
    let right = parse_expr(parser, bp)?;

    Ok(Exp::Range {
        start: Box::new(left),
        end: Box::new(right),
    })
}

fn self_op(token: &Token) -> Option<SelfOp> {
    match token {
        Token::Unop(Unop::PlusPlus) => Some(SelfOp::Increase),
        Token::Unop(Unop::MinusMinus) => Some(SelfOp::Decrease),
        _ => None,
    }
}

/// `!operand`
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    parser.expect(TokenKind::Unop(Unop::Not))?;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Exp::Not(Box::new(operand)))
}

/// `++a` / `--a`
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    let position = parser.get_position();
    let operator_token = parser.advance()?;

    let op = match self_op(&operator_token) {
        Some(op) => op,
        None => {
            return Err(ParseError::new(
                ParseErrorImpl::UnexpectedToken {
                    token: operator_token.to_string(),
                },
                position,
            ))
        }
    };

    let variable = parser.expect_identifier()?;
    Ok(Exp::SelfOperation {
        variable,
        op,
        prefix: true,
    })
}

/// `a++` / `a--`
pub fn parse_postfix_expr(
    parser: &mut Parser,
    left: Exp,
    _bp: BindingPower,
) -> Result<Exp, ParseError> {
    let position = parser.get_position();
    let operator_token = parser.advance()?;

    match (left, self_op(&operator_token)) {
        (Exp::Variable(variable), Some(op)) => Ok(Exp::SelfOperation {
            variable,
            op,
            prefix: false,
        }),
        _ => Err(ParseError::new(
            ParseErrorImpl::UnexpectedTokenDetailed {
                token: operator_token.to_string(),
                message: String::from("only variables can be incremented or decremented"),
            },
            position,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    parser.skip_line_breaks();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.skip_line_breaks();
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;

    Ok(expr)
}

/// Parses `ident [: Type] (, ident [: Type])* ->`, or a bare `->`.
fn parse_lambda_parameters(
    parser: &mut Parser,
) -> Result<Vec<(String, Option<Type>)>, ParseError> {
    let mut parameters = vec![];

    if parser.at(TokenKind::Symbol(Symbol::Arrow)) {
        parser.advance()?;
        return Ok(parameters);
    }

    loop {
        let name = parser.expect_identifier()?;
        let ty = if parser.at(TokenKind::Symbol(Symbol::Colon)) {
            parser.advance()?;
            Some(parse_type(parser)?)
        } else {
            None
        };
        parameters.push((name, ty));

        if parser.at(TokenKind::Symbol(Symbol::Comma)) {
            parser.advance()?;
            continue;
        }

        parser.expect(TokenKind::Symbol(Symbol::Arrow))?;
        return Ok(parameters);
    }
}

/// `{ [params ->] body }`
///
/// The parameter list is parsed speculatively; if it does not end in `->`
/// the cursor is rewound and the whole content is the body.
pub fn parse_lambda(parser: &mut Parser) -> Result<Lambda, ParseError> {
    parser.expect(TokenKind::Bracket(Bracket::LCurly))?;
    parser.skip_line_breaks();

    let start = parser.get_position();
    let parameters = match parse_lambda_parameters(parser) {
        Ok(parameters) => parameters,
        Err(_) => {
            parser.set_position(start);
            vec![]
        }
    };

    parser.skip_line_breaks();
    let body = parse_expr(parser, BindingPower::Default)?;
    parser.skip_line_breaks();
    parser.expect(TokenKind::Bracket(Bracket::RCurly))?;

    Ok(Lambda {
        parameters,
        body: Box::new(body),
    })
}

pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    Ok(Exp::Lambda(parse_lambda(parser)?))
}

/// An if-expression branch: either a bare expression or `{ expression }`.
fn parse_branch_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    if !parser.at(TokenKind::Bracket(Bracket::LCurly)) {
        return parse_expr(parser, BindingPower::Default);
    }

    parser.advance()?;
    parser.skip_line_breaks();
    let branch = parse_expr(parser, BindingPower::Default)?;
    parser.skip_line_breaks();
    parser.expect(TokenKind::Bracket(Bracket::RCurly))?;

    Ok(branch)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    parser.expect(TokenKind::Keyword(Keyword::If))?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Bracket(Bracket::RParen))?;
    parser.skip_line_breaks();

    let then_branch = parse_branch_expr(parser)?;

    let before_else = parser.get_position();
    parser.skip_line_breaks();
    let else_branch = if parser.at(TokenKind::Keyword(Keyword::Else)) {
        parser.advance()?;
        parser.skip_line_breaks();
        Some(Box::new(parse_branch_expr(parser)?))
    } else {
        parser.set_position(before_else);
        None
    };

    Ok(Exp::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

/// `Array(size, { i -> ... })`, `MutableList(size) { i -> ... }`
pub fn parse_constructor_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    let constructor = parser.advance()?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let size = parse_expr(parser, BindingPower::Default)?;

    let init = if parser.at(TokenKind::Symbol(Symbol::Comma)) {
        parser.advance()?;
        parser.skip_line_breaks();
        let init = parse_lambda(parser)?;
        parser.expect(TokenKind::Bracket(Bracket::RParen))?;
        init
    } else {
        parser.expect(TokenKind::Bracket(Bracket::RParen))?;
        parse_lambda(parser)?
    };

    let size = Box::new(size);
    match constructor {
        Token::Type(TypeName::MutableList) => Ok(Exp::MutableList { size, init }),
        _ => Ok(Exp::Array { size, init }),
    }
}

/// Comma separated expressions up to the closing `)`; the `(` is already consumed.
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Exp>, ParseError> {
    let mut arguments = vec![];
    parser.skip_line_breaks();

    while !parser.at(TokenKind::Bracket(Bracket::RParen)) {
        if !arguments.is_empty() {
            parser.expect(TokenKind::Symbol(Symbol::Comma))?;
            parser.skip_line_breaks();
        }
        arguments.push(parse_expr(parser, BindingPower::Default)?);
        parser.skip_line_breaks();
    }

    parser.expect(TokenKind::Bracket(Bracket::RParen))?;
    Ok(arguments)
}

/// `arrayOf(...)` / `mutableListOf(...)`
pub fn parse_collection_literal_expr(parser: &mut Parser) -> Result<Exp, ParseError> {
    let constructor = parser.advance()?;
    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let elements = parse_arguments(parser)?;

    match constructor {
        Token::Keyword(Keyword::MutableListOf) => Ok(Exp::MutableListOf(elements)),
        _ => Ok(Exp::ArrayOf(elements)),
    }
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Exp,
    _bp: BindingPower,
) -> Result<Exp, ParseError> {
    let callee = match left {
        Exp::Variable(name) => name,
        _ => return Err(parser.unexpected("only named functions can be called")),
    };

    parser.expect(TokenKind::Bracket(Bracket::LParen))?;
    let arguments = parse_arguments(parser)?;

    Ok(Exp::Call { callee, arguments })
}

pub fn parse_index_expr(
    parser: &mut Parser,
    left: Exp,
    _bp: BindingPower,
) -> Result<Exp, ParseError> {
    let variable = match left {
        Exp::Variable(name) => name,
        _ => return Err(parser.unexpected("only variables can be indexed")),
    };

    parser.expect(TokenKind::Bracket(Bracket::LBracket))?;
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Bracket(Bracket::RBracket))?;

    Ok(Exp::Index {
        variable,
        index: Box::new(index),
    })
}
