use std::{fmt, rc::Rc};

use crate::external::value::{ExternalRef, ExternalValue};

/// Variadic numeric operators, folded left over `a`, `b`, `others...`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `p + c`
    Add,
    /// `p - c`
    Sub,
    /// `p * c`
    Multiply,
    /// `p / c`
    Divide,
    /// `p ^ c`
    Pow,
    /// Floored modulo.
    Modulo,
    /// Larger of the two.
    Max,
    /// Smaller of the two.
    Min,
    /// Logical AND as 1/0.
    And,
    /// Logical OR as 1/0.
    Or,
}

impl BinaryOp {
    /// Every binary operator, in registry order.
    pub const ALL: [BinaryOp; 10] = [
        Self::Add,
        Self::Sub,
        Self::Multiply,
        Self::Divide,
        Self::Pow,
        Self::Modulo,
        Self::Max,
        Self::Min,
        Self::And,
        Self::Or,
    ];

    /// Authoring tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Pow => "pow",
            Self::Modulo => "modulo",
            Self::Max => "max",
            Self::Min => "min",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Single-operand functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Absolute value.
    Abs,
    /// Square root.
    Sqrt,
    /// Natural logarithm.
    Log,
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
    /// Tangent (radians).
    Tan,
    /// Arc cosine.
    Acos,
    /// Arc sine.
    Asin,
    /// Arc tangent.
    Atan,
    /// `e^v`
    Exp,
    /// Round half toward positive infinity.
    Round,
    /// Ceiling.
    Ceil,
    /// Floor.
    Floor,
    /// Logical negation as 1/0.
    Not,
}

impl UnaryOp {
    /// Every unary operator, in registry order.
    pub const ALL: [UnaryOp; 14] = [
        Self::Abs,
        Self::Sqrt,
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Acos,
        Self::Asin,
        Self::Atan,
        Self::Exp,
        Self::Round,
        Self::Ceil,
        Self::Floor,
        Self::Not,
    ];

    /// Authoring tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Atan => "atan",
            Self::Exp => "exp",
            Self::Round => "round",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Not => "not",
        }
    }
}

/// Two-operand comparisons yielding 1/0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `left == right`
    Eq,
    /// `left != right`
    Neq,
    /// `left < right`
    LessThan,
    /// `left > right`
    GreaterThan,
    /// `left <= right`
    LessOrEq,
    /// `left >= right`
    GreaterOrEq,
}

impl CompareOp {
    /// Every comparison, in registry order.
    pub const ALL: [CompareOp; 6] = [
        Self::Eq,
        Self::Neq,
        Self::LessThan,
        Self::GreaterThan,
        Self::LessOrEq,
        Self::GreaterOrEq,
    ];

    /// Authoring tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::LessThan => "lessThan",
            Self::GreaterThan => "greaterThan",
            Self::LessOrEq => "lessOrEq",
            Self::GreaterOrEq => "greaterOrEq",
        }
    }
}

/// The closed registry of node kinds.
///
/// Authoring tags resolve through [`NodeKind::from_tag`]; anything it rejects is an
/// unknown kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Variadic fold.
    Binary(BinaryOp),
    /// Single-operand function.
    Unary(UnaryOp),
    /// Comparison.
    Compare(CompareOp),
    /// Conditional.
    Cond,
    /// Assignment into an external value.
    Set,
    /// Sequence.
    Block,
    /// External callback invocation.
    Call,
    /// External value read.
    Value,
    /// Numeric literal.
    Number,
}

impl NodeKind {
    /// Authoring tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Binary(op) => op.tag(),
            Self::Unary(op) => op.tag(),
            Self::Compare(op) => op.tag(),
            Self::Cond => "cond",
            Self::Set => "set",
            Self::Block => "block",
            Self::Call => "call",
            Self::Value => "value",
            Self::Number => "number",
        }
    }

    /// Look up an authoring tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "add" => Self::Binary(BinaryOp::Add),
            "sub" => Self::Binary(BinaryOp::Sub),
            "multiply" => Self::Binary(BinaryOp::Multiply),
            "divide" => Self::Binary(BinaryOp::Divide),
            "pow" => Self::Binary(BinaryOp::Pow),
            "modulo" => Self::Binary(BinaryOp::Modulo),
            "max" => Self::Binary(BinaryOp::Max),
            "min" => Self::Binary(BinaryOp::Min),
            "and" => Self::Binary(BinaryOp::And),
            "or" => Self::Binary(BinaryOp::Or),
            "abs" => Self::Unary(UnaryOp::Abs),
            "sqrt" => Self::Unary(UnaryOp::Sqrt),
            "log" => Self::Unary(UnaryOp::Log),
            "sin" => Self::Unary(UnaryOp::Sin),
            "cos" => Self::Unary(UnaryOp::Cos),
            "tan" => Self::Unary(UnaryOp::Tan),
            "acos" => Self::Unary(UnaryOp::Acos),
            "asin" => Self::Unary(UnaryOp::Asin),
            "atan" => Self::Unary(UnaryOp::Atan),
            "exp" => Self::Unary(UnaryOp::Exp),
            "round" => Self::Unary(UnaryOp::Round),
            "ceil" => Self::Unary(UnaryOp::Ceil),
            "floor" => Self::Unary(UnaryOp::Floor),
            "not" => Self::Unary(UnaryOp::Not),
            "eq" => Self::Compare(CompareOp::Eq),
            "neq" => Self::Compare(CompareOp::Neq),
            "lessThan" => Self::Compare(CompareOp::LessThan),
            "greaterThan" => Self::Compare(CompareOp::GreaterThan),
            "lessOrEq" => Self::Compare(CompareOp::LessOrEq),
            "greaterOrEq" => Self::Compare(CompareOp::GreaterOrEq),
            "cond" => Self::Cond,
            "set" => Self::Set,
            "block" => Self::Block,
            "call" => Self::Call,
            "value" => Self::Value,
            "number" => Self::Number,
            _ => return None,
        };
        Some(kind)
    }

    /// Every registered kind.
    pub fn all() -> impl Iterator<Item = NodeKind> {
        BinaryOp::ALL
            .into_iter()
            .map(Self::Binary)
            .chain(UnaryOp::ALL.into_iter().map(Self::Unary))
            .chain(CompareOp::ALL.into_iter().map(Self::Compare))
            .chain([
                Self::Cond,
                Self::Set,
                Self::Block,
                Self::Call,
                Self::Value,
                Self::Number,
            ])
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Side-effecting function receiving the evaluated arguments of a `call` node.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&[f64])>);

impl Callback {
    /// Wrap a closure.
    pub fn new(f: impl Fn(&[f64]) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A callback that ignores its arguments.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke synchronously.
    pub fn invoke(&self, args: &[f64]) {
        (self.0)(args)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// Anything that can sit in an operand field.
#[derive(Clone, Debug)]
pub enum Operand {
    /// Fixed number.
    Number(f64),
    /// Live external value, read on every pass.
    External(ExternalRef),
    /// Nested expression.
    Node(Box<ExpressionNode>),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<ExpressionNode> for Operand {
    fn from(node: ExpressionNode) -> Self {
        Self::Node(Box::new(node))
    }
}

impl<V: ExternalValue + 'static> From<Rc<V>> for Operand {
    fn from(value: Rc<V>) -> Self {
        Self::External(value)
    }
}

/// A typed expression tree.
///
/// Every operand field carries an explicit presence marker, so a literal `0.0` is
/// always a present operand. Required fields left `None` are rejected at compile
/// time with [`crate::ExprError::MissingOperand`].
#[derive(Clone, Debug)]
pub enum ExpressionNode {
    /// `op(a, b)` then `op(acc, other)` for each of `others`.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// First operand (required).
        a: Option<Operand>,
        /// Second operand (required).
        b: Option<Operand>,
        /// Additional operands, folded in order.
        others: Vec<Operand>,
    },
    /// `op(v)`.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand (required).
        v: Option<Operand>,
    },
    /// `op(left, right)` as 1/0.
    Compare {
        /// Comparator.
        op: CompareOp,
        /// Left side (required).
        left: Option<Operand>,
        /// Right side (required).
        right: Option<Operand>,
    },
    /// `if expr { if_node } else { else_node }`.
    Cond {
        /// Condition (required).
        expr: Option<Operand>,
        /// Taken when the condition is truthy (required).
        if_node: Option<Operand>,
        /// Taken otherwise; constant 0 when absent.
        else_node: Option<Operand>,
    },
    /// Evaluate `source` and store it into `target`.
    Set {
        /// Value to store (required).
        source: Option<Operand>,
        /// Destination; written only when present and writable.
        target: Option<ExternalRef>,
    },
    /// Evaluate `nodes` in order and return the last result.
    Block {
        /// Children, in evaluation order.
        nodes: Vec<Operand>,
    },
    /// Evaluate `args` and hand them to `callback`; yields 0.
    Call {
        /// Arguments, in evaluation order.
        args: Vec<Operand>,
        /// Receiver; a no-op when absent.
        callback: Option<Callback>,
    },
    /// Current value of an external value.
    Value {
        /// Source; reads as NaN when absent.
        source: Option<ExternalRef>,
    },
    /// Fixed number.
    Number {
        /// The constant.
        value: f64,
    },
}

impl ExpressionNode {
    /// Registry kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Binary { op, .. } => NodeKind::Binary(*op),
            Self::Unary { op, .. } => NodeKind::Unary(*op),
            Self::Compare { op, .. } => NodeKind::Compare(*op),
            Self::Cond { .. } => NodeKind::Cond,
            Self::Set { .. } => NodeKind::Set,
            Self::Block { .. } => NodeKind::Block,
            Self::Call { .. } => NodeKind::Call,
            Self::Value { .. } => NodeKind::Value,
            Self::Number { .. } => NodeKind::Number,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/node.rs"]
mod tests;
