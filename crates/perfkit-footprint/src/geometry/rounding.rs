//! Odd-pixel rounding
//!
//! A filled shape of even pixel width cannot be centered on an integer
//! control point without a half-pixel bias, so every diameter or width that
//! is centered on a control point goes through [`nearest_odd`] first.

/// Round to the nearest odd integer.
///
/// Rounds normally, then, if the result is even, steps one pixel toward `x`
/// (exactly even inputs step up). The result saturates at the `i32` range
/// and `NaN` maps to `1`.
pub fn nearest_odd(x: f64) -> i32 {
    if x.is_nan() {
        return 1;
    }

    let rounded = x.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32;
    if rounded % 2 != 0 {
        return rounded;
    }

    if x < rounded as f64 {
        rounded.checked_sub(1).unwrap_or(rounded + 1)
    } else {
        rounded.checked_add(1).unwrap_or(rounded - 1)
    }
}
