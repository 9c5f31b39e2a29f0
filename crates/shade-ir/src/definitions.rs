//! Known values of variables, consulted by constant propagation.

use std::collections::HashMap;
use std::rc::Rc;

use crate::expression::{Expression, Variable};

/// Maps variables to the expression they are known to hold.
///
/// Variables are keyed by identity, not by name, so shadowed declarations
/// with the same name stay distinct. Each entry holds its variable alive so
/// the key cannot be reused by another allocation.
#[derive(Clone, Debug, Default)]
pub struct DefinitionMap {
    values: HashMap<*const Variable, (Rc<Variable>, Expression)>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` as the definition of `variable`, replacing any earlier one.
    pub fn insert(&mut self, variable: &Rc<Variable>, value: Expression) {
        self.values
            .insert(Rc::as_ptr(variable), (variable.clone(), value));
    }

    pub fn get(&self, variable: &Rc<Variable>) -> Option<&Expression> {
        self.values
            .get(&Rc::as_ptr(variable))
            .map(|(_, value)| value)
    }

    /// The definition of `variable`, if it is a compile-time constant.
    pub fn constant_value(&self, variable: &Rc<Variable>) -> Option<&Expression> {
        self.get(variable)
            .filter(|value| value.is_compile_time_constant())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
