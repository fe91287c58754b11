use crate::{
    ast::{
        statements::{Block, Program, Stmt},
        types::Type,
    },
    errors::errors::TypeError,
};

use super::{environment::Environment, signatures::SignatureTable};

/// One type checking run.
///
/// The session owns everything that outlives a single statement: the
/// functions declared so far and the return types of the functions being
/// checked, innermost last. Separate sessions share nothing.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub(crate) signatures: SignatureTable,
    pub(crate) return_types: Vec<Type>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    pub fn get_signatures(&self) -> &SignatureTable {
        &self.signatures
    }

    /// Checks `block` statement by statement, threading the environment
    /// through under the caller's loop and return flags.
    ///
    /// Function declarations are rejected here regardless of the flags, so
    /// the only place a function can be declared is the program top level.
    ///
    /// # Returns
    ///
    /// The environment after the last statement of the block.
    pub fn type_check_block(
        &mut self,
        env: &Environment,
        loop_ok: bool,
        return_ok: bool,
        block: &Block,
    ) -> Result<Environment, TypeError> {
        let mut current = env.clone();

        for stmt in &block.statements {
            if let Stmt::FunctionDeclare(declaration) = stmt {
                return Err(TypeError::NestedFunctionDeclaration {
                    name: declaration.name.clone(),
                });
            }
            current = self.type_check_stmt(&current, loop_ok, return_ok, stmt)?;
        }

        Ok(current)
    }

    /// Checks every top-level statement starting from an empty environment.
    pub fn type_check_program(&mut self, program: &Program) -> Result<Environment, TypeError> {
        let mut env = Environment::new();

        for stmt in &program.statements {
            env = self.type_check_stmt(&env, false, false, stmt)?;
        }

        Ok(env)
    }
}

/// Type checks `program` in a fresh session and returns the final
/// top-level environment.
pub fn type_check(program: &Program) -> Result<Environment, TypeError> {
    TypeChecker::new().type_check_program(program)
}
