/// Convenience result type used across animexpr.
pub type ExprResult<T> = Result<T, ExprError>;

/// Construction-time error taxonomy.
///
/// Every variant is raised while building a producer graph. Evaluating a compiled
/// producer never fails: numeric edge cases propagate as ordinary float values.
#[derive(thiserror::Error, Debug)]
pub enum ExprError {
    /// A node object carries no `kind` tag.
    #[error("missing element type: node has no kind")]
    MissingElementType,

    /// A node object carries a `kind` tag that no node kind answers to.
    #[error("unknown node kind \"{0}\"")]
    UnknownNodeKind(String),

    /// A required operand field is absent.
    #[error("missing operand: `{field}` is required by `{kind}`")]
    MissingOperand {
        /// Tag of the node being compiled.
        kind: &'static str,
        /// Name of the absent field.
        field: &'static str,
    },

    /// An authored tree names an external value that is not bound.
    #[error("unknown value \"{0}\"")]
    UnknownValue(String),

    /// An authored tree names a callback that is not bound.
    #[error("unknown callback \"{0}\"")]
    UnknownCallback(String),

    /// The tree nests deeper than the configured limit.
    #[error("expression nesting exceeds depth limit {limit}")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },

    /// Errors when deserializing authored documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExprError {
    /// Build a [`ExprError::MissingOperand`] value.
    pub fn missing_operand(kind: &'static str, field: &'static str) -> Self {
        Self::MissingOperand { kind, field }
    }

    /// Build a [`ExprError::UnknownNodeKind`] value.
    pub fn unknown_kind(tag: impl Into<String>) -> Self {
        Self::UnknownNodeKind(tag.into())
    }

    /// Build a [`ExprError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ExprError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
