use std::{fmt, rc::Rc};

use crate::{
    expression::{
        control,
        fold,
        node::{Callback, ExpressionNode, NodeKind, Operand},
    },
    external::value::read_or_nan,
    foundation::error::{ExprError, ExprResult},
};

/// The compiled form of an expression: a zero-argument numeric producer.
///
/// Producers are immutable once built. Each call to [`Producer::eval`] is one walk
/// over the closure graph and re-reads every external value it depends on.
pub struct Producer(Box<dyn Fn() -> f64>);

impl Producer {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> f64 + 'static) -> Self {
        Self(Box::new(f))
    }

    /// A producer that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(move || value)
    }

    /// Run one evaluation.
    #[inline]
    pub fn eval(&self) -> f64 {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").finish_non_exhaustive()
    }
}

/// Knobs for [`Compiler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Deepest node nesting accepted before compilation fails.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Recursive-descent compiler from [`Operand`] trees to [`Producer`] graphs.
///
/// Compilation is eager: every branch is compiled up front, so a malformed subtree
/// fails construction even if it would never be evaluated.
#[derive(Debug, Default)]
pub struct Compiler {
    opts: CompileOptions,
    depth: usize,
}

impl Compiler {
    /// A compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A compiler with explicit options.
    pub fn with_options(opts: CompileOptions) -> Self {
        Self { opts, depth: 0 }
    }

    /// Compile one operand.
    pub fn compile(&mut self, operand: &Operand) -> ExprResult<Producer> {
        match operand {
            Operand::Number(value) => Ok(Producer::constant(*value)),
            Operand::External(value) => {
                let value = Rc::clone(value);
                Ok(Producer::new(move || read_or_nan(value.as_ref())))
            }
            Operand::Node(node) => self.compile_node(node),
        }
    }

    /// Compile one node.
    pub fn compile_node(&mut self, node: &ExpressionNode) -> ExprResult<Producer> {
        if self.depth >= self.opts.max_depth {
            return Err(ExprError::DepthExceeded {
                limit: self.opts.max_depth,
            });
        }
        self.depth += 1;
        let out = self.dispatch(node);
        self.depth -= 1;
        out
    }

    fn dispatch(&mut self, node: &ExpressionNode) -> ExprResult<Producer> {
        let kind = node.kind();
        tracing::trace!(%kind, depth = self.depth, "compile node");
        match node {
            ExpressionNode::Binary { op, a, b, others } => {
                let a = self.required(kind, "a", a.as_ref())?;
                let b = self.required(kind, "b", b.as_ref())?;
                let others = self.compile_all(others)?;
                Ok(fold::multi(*op, a, b, others))
            }
            ExpressionNode::Unary { op, v } => {
                let v = self.required(kind, "v", v.as_ref())?;
                Ok(fold::unary(*op, v))
            }
            ExpressionNode::Compare { op, left, right } => {
                let left = self.required(kind, "left", left.as_ref())?;
                let right = self.required(kind, "right", right.as_ref())?;
                Ok(fold::boolean(*op, left, right))
            }
            ExpressionNode::Cond {
                expr,
                if_node,
                else_node,
            } => {
                let expr = self.required(kind, "expr", expr.as_ref())?;
                let if_eval = self.required(kind, "ifNode", if_node.as_ref())?;
                let else_eval = match else_node {
                    Some(node) => self.compile(node)?,
                    None => Producer::constant(0.0),
                };
                Ok(control::cond(expr, if_eval, else_eval))
            }
            ExpressionNode::Set { source, target } => {
                let source = self.required(kind, "source", source.as_ref())?;
                if target.is_none() {
                    tracing::debug!("set node has no target; results will not be stored");
                }
                Ok(control::set(source, target.clone()))
            }
            ExpressionNode::Block { nodes } => Ok(control::block(self.compile_all(nodes)?)),
            ExpressionNode::Call { args, callback } => Ok(control::call(
                self.compile_all(args)?,
                callback.clone().unwrap_or_else(Callback::noop),
            )),
            ExpressionNode::Value { source } => Ok(match source {
                Some(value) => self.compile(&Operand::External(Rc::clone(value)))?,
                None => Producer::constant(f64::NAN),
            }),
            ExpressionNode::Number { value } => Ok(Producer::constant(*value)),
        }
    }

    fn required(
        &mut self,
        kind: NodeKind,
        field: &'static str,
        operand: Option<&Operand>,
    ) -> ExprResult<Producer> {
        let operand = operand.ok_or_else(|| ExprError::missing_operand(kind.tag(), field))?;
        self.compile(operand)
    }

    fn compile_all(&mut self, operands: &[Operand]) -> ExprResult<Vec<Producer>> {
        operands.iter().map(|o| self.compile(o)).collect()
    }
}

/// Compile an operand tree with default options.
pub fn compile(operand: &Operand) -> ExprResult<Producer> {
    Compiler::new().compile(operand)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/compile.rs"]
mod tests;
