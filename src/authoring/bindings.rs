use std::{collections::BTreeMap, rc::Rc};

use crate::{
    expression::node::Callback,
    external::value::{AnimatedValue, ExternalRef},
    foundation::error::{ExprError, ExprResult},
};

/// Named external values and callbacks that authored trees refer to.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    values: BTreeMap<String, ExternalRef>,
    callbacks: BTreeMap<String, Callback>,
}

impl Bindings {
    /// Empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writable value under `name`, replacing any previous binding.
    pub fn declare(&mut self, name: impl Into<String>, initial: Option<f64>) -> Rc<AnimatedValue> {
        let value = Rc::new(match initial {
            Some(v) => AnimatedValue::new(v),
            None => AnimatedValue::unset(),
        });
        self.values.insert(name.into(), value.clone());
        value
    }

    /// Bind an arbitrary external value under `name`.
    pub fn bind_value(&mut self, name: impl Into<String>, value: ExternalRef) {
        self.values.insert(name.into(), value);
    }

    /// Bind a callback under `name`.
    pub fn bind_callback(&mut self, name: impl Into<String>, callback: Callback) {
        self.callbacks.insert(name.into(), callback);
    }

    /// Whether a value is bound under `name`.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Resolve a value name.
    pub fn value(&self, name: &str) -> ExprResult<ExternalRef> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ExprError::UnknownValue(name.to_string()))
    }

    /// Resolve a callback name.
    pub fn callback(&self, name: &str) -> ExprResult<Callback> {
        self.callbacks
            .get(name)
            .cloned()
            .ok_or_else(|| ExprError::UnknownCallback(name.to_string()))
    }

    /// Write `value` into the named external value.
    ///
    /// Returns `false` if the bound value is read-only.
    pub fn assign(&self, name: &str, value: f64) -> ExprResult<bool> {
        Ok(self.value(name)?.write(value))
    }

    /// Current reading of every bound value, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, Option<f64>> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.read()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/authoring/bindings.rs"]
mod tests;
