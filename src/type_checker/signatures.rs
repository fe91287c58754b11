use std::fmt::Display;

use indexmap::IndexMap;

use crate::{
    ast::{statements::FunctionDeclaration, types::Type},
    errors::errors::TypeError,
};

/// A function's identity: its name and ordered parameter types.
///
/// Two declarations with the same name but different parameter types are
/// distinct overloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub name: String,
    pub parameters: Vec<Type>,
}

impl Signature {
    pub fn new(name: &str, parameters: Vec<Type>) -> Self {
        Signature {
            name: name.to_string(),
            parameters,
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}({})", self.name, parameters)
    }
}

/// Declared functions, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SignatureTable {
    functions: IndexMap<Signature, FunctionDeclaration>,
}

impl SignatureTable {
    pub fn new() -> Self {
        SignatureTable::default()
    }

    pub fn contains(&self, signature: &Signature) -> bool {
        self.functions.contains_key(signature)
    }

    pub fn get(&self, signature: &Signature) -> Option<&FunctionDeclaration> {
        self.functions.get(signature)
    }

    pub fn declare(&mut self, declaration: FunctionDeclaration) -> Result<(), TypeError> {
        let signature = declaration.signature();
        if self.contains(&signature) {
            return Err(TypeError::FunctionAlreadyDeclared { signature });
        }

        self.functions.insert(signature, declaration);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &FunctionDeclaration)> {
        self.functions.iter()
    }
}
