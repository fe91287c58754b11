use std::collections::HashMap;

use crate::{
    ast::{expressions::Exp, statements::Stmt},
    errors::errors::ParseError,
    lexer::tokens::{Binop, Bracket, Keyword, Symbol, TokenKind, TypeName, Unop},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Relational,
    Range,
    Additive,
    Multiplicative,
    Unary,
    Postfix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, ParseError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Exp, ParseError>;
pub type LEDHandler = fn(&mut Parser, Exp, BindingPower) -> Result<Exp, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Binop(Binop::And), BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Or), BindingPower::Logical, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Binop(Binop::Less), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::LessEqual), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Greater), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::GreaterEqual), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::EqualEqual), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::NotEqual), BindingPower::Relational, parse_binary_expr);

    parser.led(TokenKind::Symbol(Symbol::DotDot), BindingPower::Range, parse_range_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Binop(Binop::Plus), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Minus), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Multiply), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Divide), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Binop(Binop::Mod), BindingPower::Multiplicative, parse_binary_expr);

    // Postfix, call and index
    parser.led(TokenKind::Unop(Unop::PlusPlus), BindingPower::Postfix, parse_postfix_expr);
    parser.led(TokenKind::Unop(Unop::MinusMinus), BindingPower::Postfix, parse_postfix_expr);
    parser.led(TokenKind::Bracket(Bracket::LParen), BindingPower::Call, parse_call_expr);
    parser.led(TokenKind::Bracket(Bracket::LBracket), BindingPower::Call, parse_index_expr);

    // Literals and symbols
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::Variable, parse_primary_expr);
    parser.nud(TokenKind::Str, parse_primary_expr);
    parser.nud(TokenKind::Keyword(Keyword::True), parse_primary_expr);
    parser.nud(TokenKind::Keyword(Keyword::False), parse_primary_expr);
    parser.nud(TokenKind::Bracket(Bracket::LParen), parse_grouping_expr);
    parser.nud(TokenKind::Bracket(Bracket::LCurly), parse_lambda_expr);
    parser.nud(TokenKind::Unop(Unop::Not), parse_unary_expr);
    parser.nud(TokenKind::Unop(Unop::PlusPlus), parse_prefix_expr);
    parser.nud(TokenKind::Unop(Unop::MinusMinus), parse_prefix_expr);
    parser.nud(TokenKind::Keyword(Keyword::If), parse_if_expr);

    // Collections
    parser.nud(TokenKind::Type(TypeName::Array), parse_constructor_expr);
    parser.nud(TokenKind::Type(TypeName::MutableList), parse_constructor_expr);
    parser.nud(TokenKind::Keyword(Keyword::ArrayOf), parse_collection_literal_expr);
    parser.nud(TokenKind::Keyword(Keyword::MutableListOf), parse_collection_literal_expr);

    // Statements
    parser.stmt(TokenKind::Keyword(Keyword::Var), parse_var_decl_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Val), parse_var_decl_stmt);
    parser.stmt(TokenKind::Variable, parse_symbol_stmt);
    parser.stmt(TokenKind::Unop(Unop::PlusPlus), parse_expression_stmt);
    parser.stmt(TokenKind::Unop(Unop::MinusMinus), parse_expression_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::If), parse_if_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::For), parse_for_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::While), parse_while_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Break), parse_loop_control_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Continue), parse_loop_control_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Fun), parse_fn_decl_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Return), parse_return_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Print), parse_print_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Println), parse_print_stmt);
    parser.stmt(TokenKind::Bracket(Bracket::LCurly), parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
