use std::{collections::HashMap, rc::Rc};

use crate::{ast::types::Type, errors::errors::TypeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub ty: Type,
    pub read_only: bool,
}

/// Variables in scope at some point of a program.
///
/// Environments are persistent: every update returns a new environment and
/// leaves the receiver untouched. The map is shared until a write, so
/// cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: Rc<HashMap<String, Binding>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Binding> {
        self.variables.get(variable_name)
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variables.contains_key(variable_name)
    }

    /// Returns a copy of this environment with `variable_name` bound,
    /// replacing any existing binding.
    pub fn with_variable(&self, variable_name: &str, ty: Type, read_only: bool) -> Environment {
        let mut environment = self.clone();
        Rc::make_mut(&mut environment.variables)
            .insert(variable_name.to_string(), Binding { ty, read_only });
        environment
    }

    /// Like `with_variable`, but fails if the name is already bound.
    pub fn declare_variable(
        &self,
        variable_name: &str,
        ty: Type,
        read_only: bool,
    ) -> Result<Environment, TypeError> {
        if self.contains(variable_name) {
            Err(TypeError::VariableAlreadyDeclared {
                variable: variable_name.to_string(),
            })
        } else {
            Ok(self.with_variable(variable_name, ty, read_only))
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Binding)> {
        self.variables.iter()
    }
}
