//! Numeric helpers shared by the node reducers.
//!
//! Values are plain `f64`. Logical results are encoded as `1.0` / `0.0`, and any
//! number is coerced to a boolean through [`is_truthy`].

/// Truthiness of a numeric value: nonzero and not NaN.
#[inline]
pub fn is_truthy(x: f64) -> bool {
    x != 0.0 && !x.is_nan()
}

/// Encode a boolean as `1.0` / `0.0`.
#[inline]
pub fn from_bool(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Floored modulo: the result takes the sign of the divisor.
///
/// `floored_mod(-1.0, 4.0) == 3.0`, unlike the truncated remainder `-1.0 % 4.0`.
#[inline]
pub fn floored_mod(p: f64, c: f64) -> f64 {
    ((p % c) + c) % c
}

/// Exponentiation with the host `Math.pow` edge cases.
///
/// `f64::powf` returns `1.0` for `1^NaN` and `(-1)^inf`; the host yields NaN.
#[inline]
pub fn pow(base: f64, exp: f64) -> f64 {
    if exp.is_nan() || (base.abs() == 1.0 && exp.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exp)
}

/// Round half toward positive infinity (`round(-2.5) == -2`, `round(2.5) == 3`).
///
/// A zero result keeps the sign of `x`, so `round(-0.4)` is `-0.0` as in the host.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 { 0.0_f64.copysign(x) } else { rounded }
}

/// Select the larger value, keeping `p` when the comparison is undecided (NaN).
#[inline]
pub fn select_max(p: f64, c: f64) -> f64 {
    if c > p { c } else { p }
}

/// Select the smaller value, keeping `p` when the comparison is undecided (NaN).
#[inline]
pub fn select_min(p: f64, c: f64) -> f64 {
    if c < p { c } else { p }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
