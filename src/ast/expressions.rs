//! Expression nodes.
//!
//! `Exp` is a closed enum; every consumer matches it exhaustively. Child
//! expressions are boxed, and all ordered containers are plain vectors so
//! that structural equality is order-sensitive.

use super::{
    ast::{ArithmeticOp, ComparisonOp, LogicalOp, SelfOp},
    types::Type,
};

/// A string literal after template splicing.
///
/// `remainder` holds the literal text with every interpolation cut out,
/// and `interpolations` holds each spliced expression keyed by the offset
/// in `remainder` where it was removed, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringExp {
    pub remainder: String,
    pub interpolations: Vec<(usize, Exp)>,
}

impl StringExp {
    pub fn plain(text: &str) -> Self {
        StringExp {
            remainder: text.to_string(),
            interpolations: vec![],
        }
    }
}

/// `{ a: Int, b -> body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lambda {
    /// Parameter names with their optional annotations, in order.
    pub parameters: Vec<(String, Option<Type>)>,
    pub body: Box<Exp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    Int(i32),
    Boolean(bool),
    Str(StringExp),
    Variable(String),
    Arithmetic {
        left: Box<Exp>,
        op: ArithmeticOp,
        right: Box<Exp>,
    },
    Comparison {
        left: Box<Exp>,
        op: ComparisonOp,
        right: Box<Exp>,
    },
    Logical {
        left: Box<Exp>,
        op: LogicalOp,
        right: Box<Exp>,
    },
    Not(Box<Exp>),
    /// `++a`, `a--` and friends; `prefix` records which side the operator was on.
    SelfOperation {
        variable: String,
        op: SelfOp,
        prefix: bool,
    },
    If {
        condition: Box<Exp>,
        then_branch: Box<Exp>,
        else_branch: Option<Box<Exp>>,
    },
    /// Inclusive `start..end`.
    Range {
        start: Box<Exp>,
        end: Box<Exp>,
    },
    /// `Array(size, { i -> ... })`
    Array {
        size: Box<Exp>,
        init: Lambda,
    },
    ArrayOf(Vec<Exp>),
    /// `MutableList(size, { i -> ... })`
    MutableList {
        size: Box<Exp>,
        init: Lambda,
    },
    MutableListOf(Vec<Exp>),
    Lambda(Lambda),
    Call {
        callee: String,
        arguments: Vec<Exp>,
    },
    Index {
        variable: String,
        index: Box<Exp>,
    },
}

impl Exp {
    pub fn var(name: &str) -> Self {
        Exp::Variable(name.to_string())
    }

    pub fn string(text: &str) -> Self {
        Exp::Str(StringExp::plain(text))
    }

    pub fn arithmetic(left: Exp, op: ArithmeticOp, right: Exp) -> Self {
        Exp::Arithmetic {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn comparison(left: Exp, op: ComparisonOp, right: Exp) -> Self {
        Exp::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Exp, op: LogicalOp, right: Exp) -> Self {
        Exp::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn self_operation(variable: &str, op: SelfOp, prefix: bool) -> Self {
        Exp::SelfOperation {
            variable: variable.to_string(),
            op,
            prefix,
        }
    }

    pub fn call(callee: &str, arguments: Vec<Exp>) -> Self {
        Exp::Call {
            callee: callee.to_string(),
            arguments,
        }
    }
}
