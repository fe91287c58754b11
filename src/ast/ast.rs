//! Operator tags shared by expressions and statements.
//!
//! Each enum is closed; the parser maps tokens onto them and the type
//! checker matches on them exhaustively.

use std::fmt::Display;

/// `+ - * / %`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

/// `> < >= <= == !=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
}

/// `&& ||`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

/// Direction of `++` / `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelfOp {
    Increase,
    Decrease,
}

/// `+= -= *= /=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundAssignOp {
    PlusEqual,
    MinusEqual,
    MultiplyEqual,
    DivideEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopControl {
    Break,
    Continue,
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ArithmeticOp::Plus => "+",
            ArithmeticOp::Minus => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
            ArithmeticOp::Modulo => "%",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ComparisonOp::Greater => ">",
            ComparisonOp::Less => "<",
            ComparisonOp::GreaterEqual => ">=",
            ComparisonOp::LessEqual => "<=",
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogicalOp::And => write!(f, "&&"),
            LogicalOp::Or => write!(f, "||"),
        }
    }
}

impl Display for SelfOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelfOp::Increase => write!(f, "++"),
            SelfOp::Decrease => write!(f, "--"),
        }
    }
}

impl Display for CompoundAssignOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            CompoundAssignOp::PlusEqual => "+=",
            CompoundAssignOp::MinusEqual => "-=",
            CompoundAssignOp::MultiplyEqual => "*=",
            CompoundAssignOp::DivideEqual => "/=",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for LoopControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopControl::Break => write!(f, "break"),
            LoopControl::Continue => write!(f, "continue"),
        }
    }
}
