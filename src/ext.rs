//! Range tests in method position.

use crate::compare;


/// The **comparable** trait lets the range tests be called on the value
/// being tested, rather than passing it as the first argument.
///
/// ```
/// use between::Comparable;
///
/// assert!(5_u32.is_between(&1, &10));
/// assert!("am".is_between("ab", "ay"));
/// assert!('y'.is_in_range(&'b', &'y'));
/// ```
pub trait Comparable {

    /// Returns whether this value lies strictly between the two bounds.
    fn is_between(&self, lower: &Self, upper: &Self) -> bool;

    /// Returns whether this value lies between the two bounds, or on
    /// either of them.
    fn is_in_range(&self, lower: &Self, upper: &Self) -> bool;
}

// Defined on *anything* that can be compared, including unsized things
// like `str` and slices.

impl<T> Comparable for T where T: Ord + ?Sized {
    fn is_between(&self, lower: &Self, upper: &Self) -> bool {
        compare::is_between(self, lower, upper)
    }

    fn is_in_range(&self, lower: &Self, upper: &Self) -> bool {
        compare::is_in_range(self, lower, upper)
    }
}
