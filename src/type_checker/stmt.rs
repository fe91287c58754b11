use std::collections::HashSet;

use crate::{
    ast::{
        ast::CompoundAssignOp,
        statements::{FunctionDeclaration, Stmt},
        types::{BasicType, Type, BOOLEAN},
    },
    errors::errors::TypeError,
};

use super::{
    environment::{Binding, Environment},
    type_checker::TypeChecker,
};

fn compound_assign_allowed(op: CompoundAssignOp, target: &Type, value: &Type) -> bool {
    match (op, target, value) {
        (_, Type::Basic(BasicType::Int), Type::Basic(BasicType::Int)) => true,
        (
            CompoundAssignOp::PlusEqual,
            Type::Basic(BasicType::String),
            Type::Basic(BasicType::Int | BasicType::String),
        ) => true,
        _ => false,
    }
}

/// Looks up a variable that is about to be written to.
fn writable_binding<'a>(env: &'a Environment, variable: &str) -> Result<&'a Binding, TypeError> {
    let binding = env
        .get_variable(variable)
        .ok_or_else(|| TypeError::UndefinedVariable {
            variable: variable.to_string(),
        })?;

    if binding.read_only {
        return Err(TypeError::ReadOnlyVariable {
            variable: variable.to_string(),
        });
    }

    Ok(binding)
}

impl TypeChecker {
    /// Checks one statement and returns the environment that follows it.
    ///
    /// # Arguments
    ///
    /// * `env` - Variables in scope before the statement
    /// * `loop_ok` - Whether `break` and `continue` are allowed
    /// * `return_ok` - Whether `return` is allowed
    /// * `stmt` - The statement to check
    pub fn type_check_stmt(
        &mut self,
        env: &Environment,
        loop_ok: bool,
        return_ok: bool,
        stmt: &Stmt,
    ) -> Result<Environment, TypeError> {
        match stmt {
            Stmt::VariableDeclare {
                variable,
                ty,
                read_only,
            } => match ty {
                Some(ty) => env.declare_variable(variable, ty.clone(), *read_only),
                None => Err(TypeError::ExpectedExplicitType {
                    variable: variable.clone(),
                }),
            },
            Stmt::Assign {
                variable,
                value,
                ty,
                is_new: true,
                read_only,
            } => {
                if env.contains(variable) {
                    return Err(TypeError::VariableAlreadyDeclared {
                        variable: variable.clone(),
                    });
                }

                let value_type = self.type_of_expected(env, value, ty.as_ref())?;
                if let Some(ty) = ty {
                    if *ty != value_type {
                        return Err(TypeError::TypeMatchError {
                            expected: ty.clone(),
                            received: value_type,
                        });
                    }
                }

                Ok(env.with_variable(variable, value_type, *read_only))
            }
            Stmt::Assign {
                variable,
                value,
                is_new: false,
                ..
            } => {
                let binding = writable_binding(env, variable)?;
                let value_type = self.type_of_expected(env, value, Some(&binding.ty))?;

                if value_type != binding.ty {
                    return Err(TypeError::TypeMatchError {
                        expected: binding.ty.clone(),
                        received: value_type,
                    });
                }

                Ok(env.clone())
            }
            Stmt::CompoundAssign {
                variable,
                op,
                value,
            } => {
                let binding = writable_binding(env, variable)?;
                let value_type = self.type_of(env, value)?;

                if !compound_assign_allowed(*op, &binding.ty, &value_type) {
                    return Err(TypeError::BinaryOperatorMismatch {
                        operator: op.to_string(),
                        left: binding.ty.clone(),
                        right: value_type,
                    });
                }

                Ok(env.clone())
            }
            // TODO: check the condition is Boolean and both blocks under the caller's flags.
            Stmt::If { .. } => Ok(env.clone()),
            Stmt::For {
                variable,
                source,
                body,
            } => {
                let source_type = self.type_of(env, source)?;
                let element = match source_type.element_type() {
                    Some(element) => element,
                    None => {
                        return Err(TypeError::NotACollection {
                            received: source_type,
                        })
                    }
                };

                let body_env = env.with_variable(variable, element, false);
                self.type_check_block(&body_env, true, return_ok, body)?;

                Ok(env.clone())
            }
            Stmt::While { condition, body } => {
                let condition = self.type_of(env, condition)?;
                if condition != BOOLEAN {
                    return Err(TypeError::TypeMatchError {
                        expected: BOOLEAN,
                        received: condition,
                    });
                }

                self.type_check_block(env, true, return_ok, body)?;

                Ok(env.clone())
            }
            Stmt::Block(block) => {
                self.type_check_block(env, loop_ok, return_ok, block)?;
                Ok(env.clone())
            }
            Stmt::LoopControl(control) => {
                if loop_ok {
                    Ok(env.clone())
                } else {
                    Err(TypeError::LoopControlOutsideLoop { control: *control })
                }
            }
            Stmt::FunctionDeclare(declaration) => self.type_check_function(env, declaration),
            Stmt::Return(value) => {
                let expected = match self.return_types.last() {
                    Some(expected) if return_ok => expected.clone(),
                    _ => return Err(TypeError::ReturnOutsideFunction),
                };

                let received = self.type_of_expected(env, value, Some(&expected))?;
                if received != expected {
                    return Err(TypeError::ReturnTypeMismatch { expected, received });
                }

                Ok(env.clone())
            }
            Stmt::FunctionCall { callee, arguments } => {
                self.type_of_call(env, callee, arguments)?;
                Ok(env.clone())
            }
            Stmt::SelfOperation { .. } => Ok(env.clone()),
            Stmt::Print(value) | Stmt::Println(value) => {
                let received = self.type_of(env, value)?;
                if !received.is_basic() {
                    return Err(TypeError::NonBasicPrint { received });
                }

                Ok(env.clone())
            }
        }
    }

    /// Checks a function body and records its signature.
    ///
    /// Parameters are read-only inside the body. The signature is only
    /// committed once the body checks, so a function cannot call itself.
    fn type_check_function(
        &mut self,
        env: &Environment,
        declaration: &FunctionDeclaration,
    ) -> Result<Environment, TypeError> {
        let signature = declaration.signature();
        if self.signatures.contains(&signature) {
            return Err(TypeError::FunctionAlreadyDeclared { signature });
        }

        let mut seen = HashSet::new();
        let mut body_env = env.clone();
        for (name, ty) in &declaration.parameters {
            if !seen.insert(name) {
                return Err(TypeError::DuplicateParameter {
                    parameter: name.clone(),
                });
            }
            body_env = body_env.with_variable(name, ty.clone(), true);
        }

        self.return_types.push(declaration.return_type.clone());
        let result = self.type_check_block(&body_env, false, true, &declaration.body);
        self.return_types.pop();
        result?;

        self.signatures.declare(declaration.clone())?;
        Ok(env.clone())
    }
}
