//! animexpr compiles animation expression trees into closure graphs.
//!
//! An [`ExpressionNode`] tree (arithmetic, trigonometry, logic, comparisons,
//! control flow and external value reads/writes) is compiled once into a
//! [`Producer`]: a zero-argument closure yielding `f64`. The host re-invokes the
//! producer once per animation tick; each invocation re-reads the live external
//! values it was compiled against.
//!
//! # Pipeline overview
//!
//! 1. **Author**: build a tree with the helpers in [`ops`], or parse a JSON
//!    [`Document`] and resolve names against [`Bindings`].
//! 2. **Compile**: [`compile`] / [`Compiler`] turn the tree into a [`Producer`].
//!    All structural errors ([`ExprError`]) surface here.
//! 3. **Evaluate**: call [`Producer::eval`] (or drive it with a [`Driver`]). Evaluation
//!    never fails; numeric edge cases propagate as NaN or infinities.
//!
//! Producers hold `Rc` handles and are single-threaded.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod authoring;
mod eval;
mod expression;
mod external;
mod foundation;

/// Builder helpers for expression trees.
pub mod ops {
    pub use crate::expression::ops::*;
}

pub use authoring::bindings::Bindings;
pub use authoring::document::{Document, compile_document};
pub use authoring::raw::{RawElement, RawNode, RawRef};
pub use eval::driver::Driver;
pub use expression::compile::{CompileOptions, Compiler, Producer, compile};
pub use expression::node::{
    BinaryOp, Callback, CompareOp, ExpressionNode, NodeKind, Operand, UnaryOp,
};
pub use external::value::{AnimatedValue, DerivedValue, ExternalRef, ExternalValue};
pub use foundation::error::{ExprError, ExprResult};
pub use foundation::math::is_truthy;
