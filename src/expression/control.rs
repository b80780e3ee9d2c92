//! Control-flow producers: `cond`, `block`, `set` and `call`.

use smallvec::SmallVec;

use crate::{
    expression::{compile::Producer, node::Callback},
    external::value::ExternalRef,
    foundation::math::is_truthy,
};

/// Evaluates the condition once, then exactly one branch.
pub(crate) fn cond(expr: Producer, if_eval: Producer, else_eval: Producer) -> Producer {
    Producer::new(move || {
        if is_truthy(expr.eval()) {
            if_eval.eval()
        } else {
            else_eval.eval()
        }
    })
}

pub(crate) fn block(nodes: Vec<Producer>) -> Producer {
    Producer::new(move || {
        let mut ret = 0.0;
        for node in &nodes {
            ret = node.eval();
        }
        ret
    })
}

/// Stores the source value into `target` and returns it, whether or not the store
/// happened.
pub(crate) fn set(source: Producer, target: Option<ExternalRef>) -> Producer {
    Producer::new(move || {
        let value = source.eval();
        if let Some(target) = &target
            && !target.write(value)
        {
            tracing::trace!(?target, "set target is read-only; write skipped");
        }
        value
    })
}

pub(crate) fn call(args: Vec<Producer>, callback: Callback) -> Producer {
    Producer::new(move || {
        let values: SmallVec<[f64; 8]> = args.iter().map(Producer::eval).collect();
        callback.invoke(&values);
        0.0
    })
}

#[cfg(test)]
#[path = "../../tests/unit/expression/control.rs"]
mod tests;
