use std::{cell::Cell, fmt, rc::Rc};

/// A mutable numeric value owned outside the interpreter.
///
/// Producers only ever hold an [`ExternalRef`] to one of these. Reading happens on
/// every evaluation pass; writing is reserved for `set` targets.
pub trait ExternalValue: fmt::Debug {
    /// Current value, or `None` when the value has not been assigned yet.
    fn read(&self) -> Option<f64>;

    /// Store `value`. Returns `false` when this value has no write capability.
    fn write(&self, _value: f64) -> bool {
        false
    }
}

/// Shared handle to an external value.
pub type ExternalRef = Rc<dyn ExternalValue>;

/// Read an external value, mapping "no value" to NaN.
///
/// NaN is falsy and poisons arithmetic, which is how an unassigned value degrades a
/// computed result instead of failing the pass.
#[inline]
pub fn read_or_nan(value: &dyn ExternalValue) -> f64 {
    value.read().unwrap_or(f64::NAN)
}

/// A writable slot, the usual backing store for animated values.
#[derive(Default)]
pub struct AnimatedValue {
    slot: Cell<Option<f64>>,
}

impl AnimatedValue {
    /// A value holding `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            slot: Cell::new(Some(initial)),
        }
    }

    /// A value that has not been assigned yet.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Current value.
    pub fn get(&self) -> Option<f64> {
        self.slot.get()
    }

    /// Replace the current value.
    pub fn set(&self, value: f64) {
        self.slot.set(Some(value));
    }

    /// Drop the current value.
    pub fn clear(&self) {
        self.slot.set(None);
    }

    /// Convenience constructor returning a shared handle.
    pub fn shared(initial: f64) -> Rc<Self> {
        Rc::new(Self::new(initial))
    }
}

impl ExternalValue for AnimatedValue {
    fn read(&self) -> Option<f64> {
        self.slot.get()
    }

    fn write(&self, value: f64) -> bool {
        self.slot.set(Some(value));
        true
    }
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnimatedValue").field(&self.slot.get()).finish()
    }
}

/// A read-only value computed by a closure on every read (clock, gesture input, ...).
pub struct DerivedValue {
    read: Box<dyn Fn() -> Option<f64>>,
}

impl DerivedValue {
    /// Wrap a reader closure.
    pub fn new(read: impl Fn() -> Option<f64> + 'static) -> Self {
        Self {
            read: Box::new(read),
        }
    }
}

impl ExternalValue for DerivedValue {
    fn read(&self) -> Option<f64> {
        (self.read)()
    }
}

impl fmt::Debug for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedValue").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/external/value.rs"]
mod tests;
