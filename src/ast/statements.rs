use super::{
    ast::{CompoundAssignOp, LoopControl, SelfOp},
    expressions::Exp,
    types::Type,
};
use crate::type_checker::signatures::Signature;

/// An ordered run of statements between braces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// The top level of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: Block,
}

impl FunctionDeclaration {
    /// The (name, parameter types) pair that identifies this overload.
    pub fn signature(&self) -> Signature {
        Signature::new(
            &self.name,
            self.parameters.iter().map(|(_, ty)| ty.clone()).collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `var a: Int` with no initializer.
    VariableDeclare {
        variable: String,
        ty: Option<Type>,
        read_only: bool,
    },
    /// `val a = 1` when `is_new`, plain `a = 1` otherwise.
    Assign {
        variable: String,
        value: Exp,
        ty: Option<Type>,
        is_new: bool,
        read_only: bool,
    },
    CompoundAssign {
        variable: String,
        op: CompoundAssignOp,
        value: Exp,
    },
    If {
        condition: Exp,
        then_block: Block,
        else_block: Option<Block>,
    },
    For {
        variable: String,
        source: Exp,
        body: Block,
    },
    While {
        condition: Exp,
        body: Block,
    },
    Block(Block),
    LoopControl(LoopControl),
    FunctionDeclare(FunctionDeclaration),
    Return(Exp),
    FunctionCall {
        callee: String,
        arguments: Vec<Exp>,
    },
    SelfOperation {
        variable: String,
        op: SelfOp,
        prefix: bool,
    },
    Print(Exp),
    Println(Exp),
}

impl Stmt {
    pub fn assign(variable: &str, value: Exp) -> Self {
        Stmt::Assign {
            variable: variable.to_string(),
            value,
            ty: None,
            is_new: false,
            read_only: false,
        }
    }

    pub fn declare(variable: &str, value: Exp, ty: Option<Type>, read_only: bool) -> Self {
        Stmt::Assign {
            variable: variable.to_string(),
            value,
            ty,
            is_new: true,
            read_only,
        }
    }
}
