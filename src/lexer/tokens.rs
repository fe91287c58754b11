use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Words that never lex as identifiers.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("for", Token::Keyword(Keyword::For));
        map.insert("in", Token::Keyword(Keyword::In));
        map.insert("while", Token::Keyword(Keyword::While));
        map.insert("if", Token::Keyword(Keyword::If));
        map.insert("else", Token::Keyword(Keyword::Else));
        map.insert("break", Token::Keyword(Keyword::Break));
        map.insert("continue", Token::Keyword(Keyword::Continue));
        map.insert("return", Token::Keyword(Keyword::Return));
        map.insert("fun", Token::Keyword(Keyword::Fun));
        map.insert("var", Token::Keyword(Keyword::Var));
        map.insert("val", Token::Keyword(Keyword::Val));
        map.insert("print", Token::Keyword(Keyword::Print));
        map.insert("println", Token::Keyword(Keyword::Println));
        map.insert("true", Token::Keyword(Keyword::True));
        map.insert("false", Token::Keyword(Keyword::False));
        map.insert("arrayOf", Token::Keyword(Keyword::ArrayOf));
        map.insert("mutableListOf", Token::Keyword(Keyword::MutableListOf));
        map.insert("Int", Token::Type(TypeName::Int));
        map.insert("Boolean", Token::Type(TypeName::Boolean));
        map.insert("String", Token::Type(TypeName::String));
        map.insert("Any", Token::Type(TypeName::Any));
        map.insert("Array", Token::Type(TypeName::Array));
        map.insert("MutableList", Token::Type(TypeName::MutableList));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    For,
    In,
    While,
    If,
    Else,
    Break,
    Continue,
    Return,
    Fun,
    Var,
    Val,
    Print,
    Println,
    True,
    False,
    ArrayOf,
    MutableListOf,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    DotDot,
    LineBreak,
    Semicolon,
    Colon,
    Comma,
    Arrow,
}

/// `<` and `>` only appear here as type-argument brackets.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Bracket {
    LParen,
    RParen,
    LCurly,
    RCurly,
    LAngle,
    RAngle,
    LBracket,
    RBracket,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Binop {
    Plus,
    Minus,
    Multiply,
    Divide,
    Mod,

    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    EqualEqual,
    NotEqual,

    And,
    Or,

    Equal,
    PlusEqual,
    MinusEqual,
    MultiplyEqual,
    DivideEqual,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Unop {
    Not,
    PlusPlus,
    MinusMinus,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TypeName {
    Int,
    Boolean,
    String,
    Any,
    Array,
    MutableList,
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    Keyword(Keyword),
    Symbol(Symbol),
    Bracket(Bracket),
    Binop(Binop),
    Unop(Unop),
    Int(i32),
    Variable(String),
    Str(String),
    Type(TypeName),
}

/// A token with its payload erased, used to key the parser's lookup tables.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Symbol(Symbol),
    Bracket(Bracket),
    Binop(Binop),
    Unop(Unop),
    Int,
    Variable,
    Str,
    Type(TypeName),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(keyword) => TokenKind::Keyword(*keyword),
            Token::Symbol(symbol) => TokenKind::Symbol(*symbol),
            Token::Bracket(bracket) => TokenKind::Bracket(*bracket),
            Token::Binop(binop) => TokenKind::Binop(*binop),
            Token::Unop(unop) => TokenKind::Unop(*unop),
            Token::Int(_) => TokenKind::Int,
            Token::Variable(_) => TokenKind::Variable,
            Token::Str(_) => TokenKind::Str,
            Token::Type(type_name) => TokenKind::Type(*type_name),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            Token::Symbol(Symbol::LineBreak) | Token::Symbol(Symbol::Semicolon)
        )
    }

    pub fn variable(name: &str) -> Self {
        Token::Variable(name.to_string())
    }

    pub fn string(text: &str) -> Self {
        Token::Str(text.to_string())
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::While => "while",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Fun => "fun",
            Keyword::Var => "var",
            Keyword::Val => "val",
            Keyword::Print => "print",
            Keyword::Println => "println",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::ArrayOf => "arrayOf",
            Keyword::MutableListOf => "mutableListOf",
        };
        write!(f, "{}", word)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Symbol::DotDot => "..",
            Symbol::LineBreak => "\\n",
            Symbol::Semicolon => ";",
            Symbol::Colon => ":",
            Symbol::Comma => ",",
            Symbol::Arrow => "->",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bracket = match self {
            Bracket::LParen => "(",
            Bracket::RParen => ")",
            Bracket::LCurly => "{",
            Bracket::RCurly => "}",
            Bracket::LAngle => "<",
            Bracket::RAngle => ">",
            Bracket::LBracket => "[",
            Bracket::RBracket => "]",
        };
        write!(f, "{}", bracket)
    }
}

impl Display for Binop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Binop::Plus => "+",
            Binop::Minus => "-",
            Binop::Multiply => "*",
            Binop::Divide => "/",
            Binop::Mod => "%",
            Binop::Greater => ">",
            Binop::Less => "<",
            Binop::GreaterEqual => ">=",
            Binop::LessEqual => "<=",
            Binop::EqualEqual => "==",
            Binop::NotEqual => "!=",
            Binop::And => "&&",
            Binop::Or => "||",
            Binop::Equal => "=",
            Binop::PlusEqual => "+=",
            Binop::MinusEqual => "-=",
            Binop::MultiplyEqual => "*=",
            Binop::DivideEqual => "/=",
        };
        write!(f, "{}", operator)
    }
}

impl Display for Unop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unop::Not => write!(f, "!"),
            Unop::PlusPlus => write!(f, "++"),
            Unop::MinusMinus => write!(f, "--"),
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(keyword) => write!(f, "{}", keyword),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
            Token::Bracket(bracket) => write!(f, "{}", bracket),
            Token::Binop(binop) => write!(f, "{}", binop),
            Token::Unop(unop) => write!(f, "{}", unop),
            Token::Int(value) => write!(f, "{}", value),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Str(text) => write!(f, "\"{}\"", text),
            Token::Type(type_name) => write!(f, "{}", type_name),
        }
    }
}
