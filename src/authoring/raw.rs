use crate::{
    authoring::bindings::Bindings,
    expression::node::{ExpressionNode, NodeKind, Operand},
    foundation::error::{ExprError, ExprResult},
};

/// An operand as written in a JSON document.
///
/// A bare number is a literal, `{"ref": "name"}` is a live external value, and any
/// other object is a node discriminated by its `kind` field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawElement {
    /// Numeric literal.
    Number(f64),
    /// Handle to a bound external value.
    Ref(RawRef),
    /// Tagged node.
    Node(Box<RawNode>),
}

/// `{"ref": "name"}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRef {
    /// Bound value name.
    #[serde(rename = "ref")]
    pub name: String,
}

/// A node object. Which fields matter depends on `kind`; the rest are ignored.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    /// Discriminant tag.
    pub kind: Option<String>,
    /// Binary fold: first operand.
    pub a: Option<RawElement>,
    /// Binary fold: second operand.
    pub b: Option<RawElement>,
    /// Binary fold: further operands.
    #[serde(default)]
    pub others: Vec<RawElement>,
    /// Unary operand.
    pub v: Option<RawElement>,
    /// Comparison left side.
    pub left: Option<RawElement>,
    /// Comparison right side.
    pub right: Option<RawElement>,
    /// Cond: condition.
    pub expr: Option<RawElement>,
    /// Cond: taken branch.
    pub if_node: Option<RawElement>,
    /// Cond: untaken branch.
    pub else_node: Option<RawElement>,
    /// Set: value to store.
    pub source: Option<RawElement>,
    /// Set: bound value name to store into.
    pub target: Option<String>,
    /// Block children.
    #[serde(default)]
    pub nodes: Vec<RawElement>,
    /// Call arguments.
    #[serde(default)]
    pub args: Vec<RawElement>,
    /// Call: bound callback name.
    pub callback: Option<String>,
    /// Value node: bound value name.
    pub name: Option<String>,
    /// Number node: the constant.
    pub value: Option<f64>,
}

impl RawElement {
    /// Resolve names and kind tags into a typed operand.
    pub fn resolve(&self, bindings: &Bindings) -> ExprResult<Operand> {
        match self {
            Self::Number(n) => Ok(Operand::Number(*n)),
            Self::Ref(r) => Ok(Operand::External(bindings.value(&r.name)?)),
            Self::Node(node) => Ok(Operand::from(node.resolve(bindings)?)),
        }
    }
}

impl RawNode {
    /// Resolve this node into a typed [`ExpressionNode`].
    pub fn resolve(&self, bindings: &Bindings) -> ExprResult<ExpressionNode> {
        let tag = self.kind.as_deref().ok_or(ExprError::MissingElementType)?;
        let kind = NodeKind::from_tag(tag).ok_or_else(|| ExprError::unknown_kind(tag))?;

        let opt = |e: &Option<RawElement>| e.as_ref().map(|e| e.resolve(bindings)).transpose();
        let all = |es: &[RawElement]| {
            es.iter()
                .map(|e| e.resolve(bindings))
                .collect::<ExprResult<Vec<_>>>()
        };

        Ok(match kind {
            NodeKind::Binary(op) => ExpressionNode::Binary {
                op,
                a: opt(&self.a)?,
                b: opt(&self.b)?,
                others: all(&self.others)?,
            },
            NodeKind::Unary(op) => ExpressionNode::Unary {
                op,
                v: opt(&self.v)?,
            },
            NodeKind::Compare(op) => ExpressionNode::Compare {
                op,
                left: opt(&self.left)?,
                right: opt(&self.right)?,
            },
            NodeKind::Cond => ExpressionNode::Cond {
                expr: opt(&self.expr)?,
                if_node: opt(&self.if_node)?,
                else_node: opt(&self.else_node)?,
            },
            NodeKind::Set => ExpressionNode::Set {
                source: opt(&self.source)?,
                target: self
                    .target
                    .as_deref()
                    .map(|name| bindings.value(name))
                    .transpose()?,
            },
            NodeKind::Block => ExpressionNode::Block {
                nodes: all(&self.nodes)?,
            },
            NodeKind::Call => ExpressionNode::Call {
                args: all(&self.args)?,
                callback: self
                    .callback
                    .as_deref()
                    .map(|name| bindings.callback(name))
                    .transpose()?,
            },
            NodeKind::Value => ExpressionNode::Value {
                source: self
                    .name
                    .as_deref()
                    .map(|name| bindings.value(name))
                    .transpose()?,
            },
            NodeKind::Number => ExpressionNode::Number {
                value: self
                    .value
                    .ok_or_else(|| ExprError::missing_operand(kind.tag(), "value"))?,
            },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/authoring/raw.rs"]
mod tests;
