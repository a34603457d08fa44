//! Strict and inclusive range tests.

use std::cmp::Ordering;


/// Returns whether `value` lies strictly between `lower` and `upper`.
/// Both endpoints are excluded.
///
/// The bounds are not checked: if `lower` is greater than `upper`, no
/// value lies between them and the result is always `false`.
///
/// ```
/// use between::is_between;
///
/// assert!(is_between(5, 1, 10));
/// assert!(!is_between(1, 1, 10));
/// assert!(!is_between(10, 1, 10));
/// ```
pub fn is_between<T: Ord>(value: T, lower: T, upper: T) -> bool {
    is_between_by(&value, &lower, &upper, Ord::cmp)
}

/// Returns whether `value` lies between `lower` and `upper`, with both
/// endpoints included.
///
/// ```
/// use between::is_in_range;
///
/// assert!(is_in_range(1, 1, 10));
/// assert!(is_in_range(10, 1, 10));
/// assert!(!is_in_range(11, 1, 10));
/// ```
pub fn is_in_range<T: Ord>(value: T, lower: T, upper: T) -> bool {
    is_in_range_by(&value, &lower, &upper, Ord::cmp)
}

/// Like `is_between`, but orders the values with the given comparison
/// function instead of `Ord`.
///
/// The function is always called with the value first and a bound
/// second, and the upper bound is only consulted if the lower one passes.
///
/// ```
/// use between::is_between_by;
///
/// assert!(is_between_by(&0.5_f64, &0.0, &1.0, f64::total_cmp));
/// ```
pub fn is_between_by<T, F>(value: &T, lower: &T, upper: &T, mut compare: F) -> bool
where T: ?Sized,
      F: FnMut(&T, &T) -> Ordering,
{
    compare(value, lower) == Ordering::Greater
        && compare(value, upper) == Ordering::Less
}

/// Like `is_in_range`, but orders the values with the given comparison
/// function instead of `Ord`.
pub fn is_in_range_by<T, F>(value: &T, lower: &T, upper: &T, mut compare: F) -> bool
where T: ?Sized,
      F: FnMut(&T, &T) -> Ordering,
{
    compare(value, lower) != Ordering::Less
        && compare(value, upper) != Ordering::Greater
}


#[cfg(test)]
mod test {
    pub use super::*;

    mod strict {
        use super::*;

        #[test]
        fn inside() {
            assert!(is_between(5, 1, 10))
        }

        #[test]
        fn lower_endpoint() {
            assert!(!is_between(1, 1, 10))
        }

        #[test]
        fn upper_endpoint() {
            assert!(!is_between(10, 1, 10))
        }

        #[test]
        fn below() {
            assert!(!is_between(-3, 1, 10))
        }

        #[test]
        fn empty_span() {
            // nothing lies strictly between two neighbours
            assert!(!is_between(4, 4, 5));
            assert!(!is_between(5, 4, 5));
        }

        #[test]
        fn reversed_bounds() {
            assert!(!is_between(5, 10, 1))
        }
    }

    mod in_range {
        use super::*;

        #[test]
        fn inside() {
            assert!(is_in_range(5, 1, 10))
        }

        #[test]
        fn single_point() {
            assert!(is_in_range(7, 7, 7));
            assert!(!is_in_range(6, 7, 7));
        }

        #[test]
        fn above() {
            assert!(!is_in_range(11_u64, 1, 10))
        }

        #[test]
        fn reversed_bounds() {
            assert!(!is_in_range(5, 10, 1));
            assert!(!is_in_range(10, 10, 1));
        }
    }

    mod by {
        use super::*;

        #[test]
        fn reversed_comparator() {
            // with the order flipped, 10 is the low end and 1 the high one
            let rev = |a: &i32, b: &i32| b.cmp(a);
            assert!(is_between_by(&5, &10, &1, rev));
            assert!(!is_between_by(&5, &1, &10, rev));
        }

        #[test]
        fn by_key() {
            let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
            assert!(is_in_range_by(&"abc", &"zz", &"zzzz", by_len));
            assert!(!is_between_by(&"abc", &"zzz", &"zzzz", by_len));
        }

        #[test]
        fn short_circuits() {
            let mut calls = 0;
            let result = is_between_by(&0, &1, &10, |a: &i32, b: &i32| { calls += 1; a.cmp(b) });
            assert!(!result);
            assert_eq!(calls, 1);
        }

        #[test]
        fn unsized_values() {
            assert!(is_in_range_by("am", "ab", "ay", |a: &str, b: &str| a.cmp(b)))
        }
    }
}
