use std::collections::HashMap;

use super::prelude::{EnvironmentError, Variable};

/// Variable table of one session. Entries are never removed.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    pub store: HashMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.store.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Result<u32, EnvironmentError> {
        self.get(name)
            .map(|variable| variable.value)
            .ok_or_else(|| EnvironmentError::UndefinedVariable { name: name.to_string() })
    }

    pub fn declare(&mut self, name: String, variable: Variable) -> Result<(), EnvironmentError> {
        if self.contains(&name) {
            return Err(EnvironmentError::VariableAlreadyDefined { name });
        }

        self.store.insert(name, variable);

        Ok(())
    }

    /// Overwrites the value of a `let` variable, keeping its mutability.
    pub fn set(&mut self, name: &str, value: u32) -> Result<(), EnvironmentError> {
        let var = match self.store.get_mut(name) {
            Some(var) => var,
            None => return Err(EnvironmentError::UndefinedVariable { name: name.to_string() })
        };

        if !var.mutability.is_mutable() {
            return Err(EnvironmentError::ImmutableVariable { name: name.to_string() });
        }

        var.value = value;

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
