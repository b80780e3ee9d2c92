//! Reducers for the arithmetic, unary and comparison node families.

use crate::{
    expression::{
        compile::Producer,
        node::{BinaryOp, CompareOp, UnaryOp},
    },
    foundation::math,
};

type Reducer = fn(f64, f64) -> f64;

fn binary_reducer(op: BinaryOp) -> Reducer {
    match op {
        BinaryOp::Add => |p, c| p + c,
        BinaryOp::Sub => |p, c| p - c,
        BinaryOp::Multiply => |p, c| p * c,
        BinaryOp::Divide => |p, c| p / c,
        BinaryOp::Pow => math::pow,
        BinaryOp::Modulo => math::floored_mod,
        BinaryOp::Max => math::select_max,
        BinaryOp::Min => math::select_min,
        BinaryOp::And => |p, c| math::from_bool(math::is_truthy(p) && math::is_truthy(c)),
        BinaryOp::Or => |p, c| math::from_bool(math::is_truthy(p) || math::is_truthy(c)),
    }
}

fn unary_fn(op: UnaryOp) -> fn(f64) -> f64 {
    match op {
        UnaryOp::Abs => f64::abs,
        UnaryOp::Sqrt => f64::sqrt,
        UnaryOp::Log => f64::ln,
        UnaryOp::Sin => f64::sin,
        UnaryOp::Cos => f64::cos,
        UnaryOp::Tan => f64::tan,
        UnaryOp::Acos => f64::acos,
        UnaryOp::Asin => f64::asin,
        UnaryOp::Atan => f64::atan,
        UnaryOp::Exp => f64::exp,
        UnaryOp::Round => math::round_half_up,
        UnaryOp::Ceil => f64::ceil,
        UnaryOp::Floor => f64::floor,
        UnaryOp::Not => |v| math::from_bool(!math::is_truthy(v)),
    }
}

fn comparator(op: CompareOp) -> fn(f64, f64) -> bool {
    match op {
        CompareOp::Eq => |l, r| l == r,
        CompareOp::Neq => |l, r| l != r,
        CompareOp::LessThan => |l, r| l < r,
        CompareOp::GreaterThan => |l, r| l > r,
        CompareOp::LessOrEq => |l, r| l <= r,
        CompareOp::GreaterOrEq => |l, r| l >= r,
    }
}

/// Left fold of `op` over `a`, `b`, then each of `others`.
pub(crate) fn multi(op: BinaryOp, a: Producer, b: Producer, others: Vec<Producer>) -> Producer {
    let f = binary_reducer(op);
    Producer::new(move || {
        let mut acc = f(a.eval(), b.eval());
        for other in &others {
            acc = f(acc, other.eval());
        }
        acc
    })
}

pub(crate) fn unary(op: UnaryOp, v: Producer) -> Producer {
    let f = unary_fn(op);
    Producer::new(move || f(v.eval()))
}

/// Comparison encoded as 1/0.
pub(crate) fn boolean(op: CompareOp, left: Producer, right: Producer) -> Producer {
    let f = comparator(op);
    Producer::new(move || math::from_bool(f(left.eval(), right.eval())))
}

#[cfg(test)]
#[path = "../../tests/unit/expression/fold.rs"]
mod tests;
