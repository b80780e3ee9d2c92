use std::collections::BTreeMap;

use crate::{
    authoring::{bindings::Bindings, raw::RawElement},
    expression::compile::{CompileOptions, Compiler, Producer},
    foundation::error::ExprResult,
};

/// A self-contained authored expression: declared values, options and a root.
///
/// ```json
/// {
///   "values": { "x": 0, "y": null },
///   "root": { "kind": "set", "target": "x",
///             "source": { "kind": "add", "a": { "ref": "x" }, "b": 1 } }
/// }
/// ```
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Document {
    /// Values to declare before resolution; `null` declares an unset value.
    #[serde(default)]
    pub values: BTreeMap<String, Option<f64>>,
    /// Compiler options.
    #[serde(default)]
    pub options: CompileOptions,
    /// Root element.
    pub root: RawElement,
}

impl Document {
    /// Parse a JSON document.
    pub fn from_json(s: &str) -> ExprResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Declare this document's values and compile its root.
    ///
    /// Values already bound by the host under the same name are kept as-is, so a host
    /// can supply its own external values in place of the declared defaults.
    ///
    /// Declarations are staged and only land in `bindings` once the root compiles;
    /// on error `bindings` is left unchanged.
    #[tracing::instrument(skip_all, fields(values = self.values.len()))]
    pub fn compile(&self, bindings: &mut Bindings) -> ExprResult<Producer> {
        let mut staged = bindings.clone();
        for (name, initial) in &self.values {
            if !staged.has_value(name) {
                staged.declare(name.clone(), *initial);
            }
        }
        let root = self.root.resolve(&staged)?;
        let producer = Compiler::with_options(self.options).compile(&root)?;
        *bindings = staged;
        tracing::debug!("document compiled");
        Ok(producer)
    }
}

/// Parse and compile a JSON document in one step.
pub fn compile_document(json: &str, bindings: &mut Bindings) -> ExprResult<Producer> {
    Document::from_json(json)?.compile(bindings)
}

#[cfg(test)]
#[path = "../../tests/unit/authoring/document.rs"]
mod tests;
