use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{ParseError, ParseErrorImpl},
    MK_DEFAULT_HANDLER,
};

use super::tokens::{Binop, Bracket, Symbol, Token, TypeName, Unop, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), ParseError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    /// Tried in order; the first pattern matching at the cursor wins, so
    /// longer operators are listed before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^[0-9]+", number_handler),
        RegexPattern::new(r"^\n", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::LineBreak), "\n")),
        RegexPattern::new(r"^[ \t\r]+", skip_handler),
        RegexPattern::new(r#"^"[^"]*""#, string_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^\.\.", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::DotDot), "..")),
        RegexPattern::new(r"^->", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::Arrow), "->")),
        RegexPattern::new(r"^\+\+", MK_DEFAULT_HANDLER!(Token::Unop(Unop::PlusPlus), "++")),
        RegexPattern::new(r"^--", MK_DEFAULT_HANDLER!(Token::Unop(Unop::MinusMinus), "--")),
        RegexPattern::new(r"^\+=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::PlusEqual), "+=")),
        RegexPattern::new(r"^-=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::MinusEqual), "-=")),
        RegexPattern::new(r"^\*=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::MultiplyEqual), "*=")),
        RegexPattern::new(r"^/=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::DivideEqual), "/=")),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(Token::Binop(Binop::EqualEqual), "==")),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::NotEqual), "!=")),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::LessEqual), "<=")),
        RegexPattern::new(r"^>=?", greater_handler),
        RegexPattern::new(r"^<", less_handler),
        RegexPattern::new(r"^&&", MK_DEFAULT_HANDLER!(Token::Binop(Binop::And), "&&")),
        RegexPattern::new(r"^\|\|", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Or), "||")),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Equal), "=")),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(Token::Unop(Unop::Not), "!")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Plus), "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Minus), "-")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Multiply), "*")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Divide), "/")),
        RegexPattern::new(r"^%", MK_DEFAULT_HANDLER!(Token::Binop(Binop::Mod), "%")),
        RegexPattern::new(r"^:", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::Colon), ":")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::Semicolon), ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(Token::Symbol(Symbol::Comma), ",")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::LParen), "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::RParen), ")")),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::LCurly), "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::RCurly), "}")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::LBracket), "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(Token::Bracket(Bracket::RBracket), "]")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    /// Open `<` brackets of an `Array<...>` or `MutableList<...>` type.
    angle_depth: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            angle_depth: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> usize {
        self.pos
    }

    /// The text `regex` matches at the cursor.
    fn matched(&self, regex: &Regex) -> Result<String, ParseError> {
        match regex.find(self.remainder()) {
            Some(found) => Ok(found.as_str().to_string()),
            None => Err(ParseError::new(
                ParseErrorImpl::UnrecognisedToken {
                    token: self.at().to_string(),
                },
                self.pos,
            )),
        }
    }

    fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), ParseError> {
    let matched = lexer.matched(regex)?;

    match matched.parse::<i32>() {
        Ok(value) => {
            lexer.push(Token::Int(value));
            lexer.advance_n(matched.len());
            Ok(())
        }
        Err(_) => Err(ParseError::new(
            ParseErrorImpl::NumberParseError { token: matched },
            lexer.get_position(),
        )),
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), ParseError> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), ParseError> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());

    let string_literal = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            // Unknown escapes keep the backslash
            _ => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    lexer.push(Token::Str(result));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), ParseError> {
    let value = lexer.matched(regex)?;

    if let Some(token) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(token.clone());
    } else {
        lexer.push(Token::Variable(value.clone()));
    }

    lexer.advance_n(value.len());
    Ok(())
}

fn less_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), ParseError> {
    let opens_type_argument = matches!(
        lexer.last_token(),
        Some(Token::Type(TypeName::Array)) | Some(Token::Type(TypeName::MutableList))
    );

    if opens_type_argument {
        lexer.angle_depth += 1;
        lexer.push(Token::Bracket(Bracket::LAngle));
    } else {
        lexer.push(Token::Binop(Binop::Less));
    }

    lexer.advance_n(1);
    Ok(())
}

fn greater_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), ParseError> {
    if lexer.angle_depth > 0 {
        lexer.angle_depth -= 1;
        lexer.push(Token::Bracket(Bracket::RAngle));
        lexer.advance_n(1);
        return Ok(());
    }

    let matched = lexer.matched(regex)?;
    if matched == ">=" {
        lexer.push(Token::Binop(Binop::GreaterEqual));
    } else {
        lexer.push(Token::Binop(Binop::Greater));
    }

    lexer.advance_n(matched.len());
    Ok(())
}

/// Scans `source` into tokens.
///
/// Line breaks are kept as `Symbol::LineBreak` tokens since they separate
/// statements; other whitespace and `//` comments are dropped. No end
/// marker is appended.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(ParseError::new(
                    ParseErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    lex.get_position(),
                ))
            }
        }
    }

    Ok(lex.tokens)
}
