//! Range tests for floating-point numbers.
//!
//! `f32` and `f64` only have a partial order, so they can’t be passed to
//! the main functions. These ones use the IEEE 754 *total* order instead:
//!
//! ```text
//! -NaN < -∞ < ... < -0.0 < +0.0 < ... < +∞ < +NaN
//! ```
//!
//! This means that negative and positive zero are different values, and
//! that NaN is never inside a range with finite bounds.

use num_traits::float::TotalOrder;

use crate::compare::{is_between_by, is_in_range_by};


/// Returns whether `value` lies strictly between `lower` and `upper`,
/// in the total order.
///
/// ```
/// use between::float;
///
/// assert!(float::is_between(0.5_f64, 0.0, 1.0));
/// assert!(!float::is_between(f64::NAN, 0.0, 1.0));
/// ```
pub fn is_between<T: TotalOrder>(value: T, lower: T, upper: T) -> bool {
    is_between_by(&value, &lower, &upper, TotalOrder::total_cmp)
}

/// Returns whether `value` lies between `lower` and `upper`, or on
/// either of them, in the total order.
pub fn is_in_range<T: TotalOrder>(value: T, lower: T, upper: T) -> bool {
    is_in_range_by(&value, &lower, &upper, TotalOrder::total_cmp)
}
