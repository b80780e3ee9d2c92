//! Builder helpers for assembling [`ExpressionNode`] trees in Rust code.

use crate::{
    expression::node::{BinaryOp, Callback, CompareOp, ExpressionNode, Operand, UnaryOp},
    external::value::ExternalRef,
};

/// Fold `op` over `a`, `b`, then `others`.
pub fn fold(
    op: BinaryOp,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    others: impl IntoIterator<Item = Operand>,
) -> ExpressionNode {
    ExpressionNode::Binary {
        op,
        a: Some(a.into()),
        b: Some(b.into()),
        others: others.into_iter().collect(),
    }
}

/// Apply a unary function.
pub fn apply(op: UnaryOp, v: impl Into<Operand>) -> ExpressionNode {
    ExpressionNode::Unary {
        op,
        v: Some(v.into()),
    }
}

/// Compare two operands.
pub fn compare(
    op: CompareOp,
    left: impl Into<Operand>,
    right: impl Into<Operand>,
) -> ExpressionNode {
    ExpressionNode::Compare {
        op,
        left: Some(left.into()),
        right: Some(right.into()),
    }
}

macro_rules! binary_helpers {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($name), "(a, b)`.")]
            pub fn $name(a: impl Into<Operand>, b: impl Into<Operand>) -> ExpressionNode {
                ExpressionNode::Binary {
                    op: BinaryOp::$op,
                    a: Some(a.into()),
                    b: Some(b.into()),
                    others: Vec::new(),
                }
            }
        )*
    };
}

macro_rules! unary_helpers {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($name), "(v)`.")]
            pub fn $name(v: impl Into<Operand>) -> ExpressionNode {
                apply(UnaryOp::$op, v)
            }
        )*
    };
}

macro_rules! compare_helpers {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($name), "(left, right)`.")]
            pub fn $name(left: impl Into<Operand>, right: impl Into<Operand>) -> ExpressionNode {
                compare(CompareOp::$op, left, right)
            }
        )*
    };
}

binary_helpers! {
    add => Add,
    sub => Sub,
    multiply => Multiply,
    divide => Divide,
    pow => Pow,
    modulo => Modulo,
    max => Max,
    min => Min,
    and => And,
    or => Or,
}

unary_helpers! {
    abs => Abs,
    sqrt => Sqrt,
    log => Log,
    sin => Sin,
    cos => Cos,
    tan => Tan,
    acos => Acos,
    asin => Asin,
    atan => Atan,
    exp => Exp,
    round => Round,
    ceil => Ceil,
    floor => Floor,
    not => Not,
}

compare_helpers! {
    eq => Eq,
    neq => Neq,
    less_than => LessThan,
    greater_than => GreaterThan,
    less_or_eq => LessOrEq,
    greater_or_eq => GreaterOrEq,
}

/// `if expr { if_node } else { else_node }`; the else branch yields 0 when `None`.
pub fn cond(
    expr: impl Into<Operand>,
    if_node: impl Into<Operand>,
    else_node: Option<Operand>,
) -> ExpressionNode {
    ExpressionNode::Cond {
        expr: Some(expr.into()),
        if_node: Some(if_node.into()),
        else_node,
    }
}

/// Store `source` into `target` and yield it.
pub fn set(source: impl Into<Operand>, target: ExternalRef) -> ExpressionNode {
    ExpressionNode::Set {
        source: Some(source.into()),
        target: Some(target),
    }
}

/// Evaluate `nodes` in order, yielding the last.
pub fn block(nodes: impl IntoIterator<Item = Operand>) -> ExpressionNode {
    ExpressionNode::Block {
        nodes: nodes.into_iter().collect(),
    }
}

/// Hand evaluated `args` to `callback`; yields 0.
pub fn call(args: impl IntoIterator<Item = Operand>, callback: Callback) -> ExpressionNode {
    ExpressionNode::Call {
        args: args.into_iter().collect(),
        callback: Some(callback),
    }
}

/// Read an external value.
pub fn value(source: ExternalRef) -> ExpressionNode {
    ExpressionNode::Value {
        source: Some(source),
    }
}

/// A numeric literal node.
pub fn number(value: f64) -> ExpressionNode {
    ExpressionNode::Number { value }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/ops.rs"]
mod tests;
