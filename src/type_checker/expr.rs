use crate::{
    ast::{
        ast::ArithmeticOp,
        expressions::{Exp, Lambda},
        types::{BasicType, Type, BOOLEAN, INT, STRING},
    },
    errors::errors::TypeError,
};

use super::{
    environment::{Binding, Environment},
    signatures::Signature,
    type_checker::TypeChecker,
};

fn arithmetic_type(op: ArithmeticOp, left: Type, right: Type) -> Result<Type, TypeError> {
    match (op, &left, &right) {
        (_, Type::Basic(BasicType::Int), Type::Basic(BasicType::Int)) => Ok(INT),
        (
            ArithmeticOp::Plus,
            Type::Basic(BasicType::String),
            Type::Basic(BasicType::Int | BasicType::String),
        ) => Ok(STRING),
        _ => Err(TypeError::BinaryOperatorMismatch {
            operator: op.to_string(),
            left,
            right,
        }),
    }
}

fn expect_operands(
    operator: String,
    expected: Type,
    left: Type,
    right: Type,
) -> Result<(), TypeError> {
    if left == expected && right == expected {
        Ok(())
    } else {
        Err(TypeError::BinaryOperatorMismatch {
            operator,
            left,
            right,
        })
    }
}

impl TypeChecker {
    /// Infers the type of `exp` under `env`.
    ///
    /// Expressions never change the environment; lambdas and collection
    /// initializers check their bodies in an extended copy.
    pub fn type_of(&self, env: &Environment, exp: &Exp) -> Result<Type, TypeError> {
        match exp {
            Exp::Int(_) => Ok(INT),
            Exp::Boolean(_) => Ok(BOOLEAN),
            Exp::Str(string) => {
                for (_, interpolation) in &string.interpolations {
                    self.type_of(env, interpolation)?;
                }
                Ok(STRING)
            }
            Exp::Variable(name) => self.type_of_variable(env, name),
            Exp::Arithmetic { left, op, right } => {
                arithmetic_type(*op, self.type_of(env, left)?, self.type_of(env, right)?)
            }
            Exp::Comparison { left, op, right } => {
                let left = self.type_of(env, left)?;
                let right = self.type_of(env, right)?;
                expect_operands(op.to_string(), INT, left, right)?;
                Ok(BOOLEAN)
            }
            Exp::Logical { left, op, right } => {
                let left = self.type_of(env, left)?;
                let right = self.type_of(env, right)?;
                expect_operands(op.to_string(), BOOLEAN, left, right)?;
                Ok(BOOLEAN)
            }
            Exp::Not(operand) => match self.type_of(env, operand)? {
                Type::Basic(BasicType::Boolean) => Ok(BOOLEAN),
                operand => Err(TypeError::UnaryOperatorMismatch {
                    operator: String::from("!"),
                    operand,
                }),
            },
            Exp::SelfOperation { variable, op, .. } => match self.type_of_variable(env, variable)? {
                Type::Basic(BasicType::Int) => Ok(INT),
                operand => Err(TypeError::UnaryOperatorMismatch {
                    operator: op.to_string(),
                    operand,
                }),
            },
            Exp::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.type_of(env, condition)?;
                if condition != BOOLEAN {
                    return Err(TypeError::TypeMatchError {
                        expected: BOOLEAN,
                        received: condition,
                    });
                }

                let else_branch = else_branch.as_ref().ok_or(TypeError::MissingElseBranch)?;
                let then_type = self.type_of(env, then_branch)?;
                let else_type = self.type_of(env, else_branch)?;
                if then_type != else_type {
                    return Err(TypeError::TypeMatchError {
                        expected: then_type,
                        received: else_type,
                    });
                }

                Ok(then_type)
            }
            Exp::Range { start, end } => {
                let start = self.type_of(env, start)?;
                let end = self.type_of(env, end)?;
                expect_operands(String::from(".."), INT, start, end)?;
                Ok(Type::Array(BasicType::Int))
            }
            Exp::Array { size, init } => self
                .type_of_initializer(env, "Array", size, init)
                .map(Type::Array),
            Exp::MutableList { size, init } => self
                .type_of_initializer(env, "MutableList", size, init)
                .map(Type::MutableList),
            Exp::ArrayOf(elements) => self
                .type_of_elements(env, "arrayOf", elements)
                .map(Type::Array),
            Exp::MutableListOf(elements) => self
                .type_of_elements(env, "mutableListOf", elements)
                .map(Type::MutableList),
            Exp::Lambda(lambda) => self.type_of_lambda(env, lambda, None),
            Exp::Call { callee, arguments } => self.type_of_call(env, callee, arguments),
            // The index itself is left unchecked.
            Exp::Index { variable, .. } => self.type_of_variable(env, variable),
        }
    }

    /// Like `type_of`, but lets a lambda borrow its parameter types from
    /// the function type it is expected to have.
    pub fn type_of_expected(
        &self,
        env: &Environment,
        exp: &Exp,
        expected: Option<&Type>,
    ) -> Result<Type, TypeError> {
        match (exp, expected) {
            (Exp::Lambda(lambda), Some(Type::Function { parameters, .. })) => {
                self.type_of_lambda(env, lambda, Some(parameters.as_slice()))
            }
            _ => self.type_of(env, exp),
        }
    }

    fn type_of_variable(&self, env: &Environment, name: &str) -> Result<Type, TypeError> {
        match env.get_variable(name) {
            Some(binding) => Ok(binding.ty.clone()),
            None => Err(TypeError::NotInScope {
                variable: name.to_string(),
            }),
        }
    }

    /// Checks a lambda body with its parameters bound as writable variables.
    ///
    /// # Arguments
    ///
    /// * `expected` - Parameter types to use for parameters without an annotation
    pub fn type_of_lambda(
        &self,
        env: &Environment,
        lambda: &Lambda,
        expected: Option<&[Type]>,
    ) -> Result<Type, TypeError> {
        let mut body_env = env.clone();
        let mut parameters = vec![];

        for (index, (name, declared)) in lambda.parameters.iter().enumerate() {
            if lambda.parameters[..index].iter().any(|(other, _)| other == name) {
                return Err(TypeError::DuplicateParameter {
                    parameter: name.clone(),
                });
            }

            let ty = match declared {
                Some(ty) => ty.clone(),
                None => expected
                    .and_then(|expected| expected.get(index))
                    .cloned()
                    .ok_or_else(|| TypeError::UnresolvedLambdaParameter {
                        parameter: name.clone(),
                    })?,
            };

            body_env = body_env.with_variable(name, ty.clone(), false);
            parameters.push(ty);
        }

        let return_type = self.type_of(&body_env, &lambda.body)?;
        Ok(Type::function(parameters, return_type))
    }

    /// Resolves a call by exact signature first, then through a variable
    /// holding a function value.
    pub fn type_of_call(
        &self,
        env: &Environment,
        callee: &str,
        arguments: &[Exp],
    ) -> Result<Type, TypeError> {
        let argument_types = arguments
            .iter()
            .map(|argument| self.type_of(env, argument))
            .collect::<Result<Vec<Type>, TypeError>>()?;
        let signature = Signature::new(callee, argument_types);

        if let Some(declaration) = self.signatures.get(&signature) {
            return Ok(declaration.return_type.clone());
        }

        // Arguments of function values are not checked against the parameters.
        if let Some(Binding {
            ty: Type::Function { return_type, .. },
            ..
        }) = env.get_variable(callee)
        {
            return Ok(return_type.as_ref().clone());
        }

        Err(TypeError::FunctionUndefined { signature })
    }

    /// `Array(size, { i -> element })` and `MutableList(...)`: returns the element type.
    fn type_of_initializer(
        &self,
        env: &Environment,
        constructor: &str,
        size: &Exp,
        init: &Lambda,
    ) -> Result<BasicType, TypeError> {
        let size = self.type_of(env, size)?;
        if size != INT {
            return Err(TypeError::TypeMatchError {
                expected: INT,
                received: size,
            });
        }

        let (index, declared) = match init.parameters.as_slice() {
            [parameter] => parameter,
            parameters => {
                return Err(TypeError::InitializerArity {
                    constructor: constructor.to_string(),
                    received: parameters.len(),
                })
            }
        };

        if let Some(declared) = declared {
            if *declared != INT {
                return Err(TypeError::InitializerParameterType {
                    constructor: constructor.to_string(),
                    received: declared.clone(),
                });
            }
        }

        let body_env = env.with_variable(index, INT, false);
        match self.type_of(&body_env, &init.body)? {
            Type::Basic(element) => Ok(element),
            other => Err(TypeError::UnsupportedElementType { received: other }),
        }
    }

    /// `arrayOf(...)` and `mutableListOf(...)`: the shared element type, or
    /// `Any` when the elements differ.
    fn type_of_elements(
        &self,
        env: &Environment,
        constructor: &str,
        elements: &[Exp],
    ) -> Result<BasicType, TypeError> {
        let mut element_types = vec![];
        for element in elements {
            match self.type_of(env, element)? {
                Type::Basic(basic) => element_types.push(basic),
                other => return Err(TypeError::UnsupportedElementType { received: other }),
            }
        }

        let first = match element_types.first() {
            Some(first) => *first,
            None => {
                return Err(TypeError::EmptyCollectionLiteral {
                    constructor: constructor.to_string(),
                })
            }
        };

        if element_types.iter().all(|element| *element == first) {
            Ok(first)
        } else {
            Ok(BasicType::Any)
        }
    }
}
