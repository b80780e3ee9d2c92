pub(crate) mod compile;
pub(crate) mod control;
pub(crate) mod fold;
pub(crate) mod node;
pub(crate) mod ops;
