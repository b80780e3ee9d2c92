pub(crate) mod bindings;
pub(crate) mod document;
pub(crate) mod raw;
