#![crate_name = "between"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Strict and inclusive range tests for any value that can be [ordered](Ord).
//!
//! A value is *between* two bounds when it’s greater than the lower one
//! and less than the upper one, and *in range* when it’s also allowed to
//! be equal to either of them.
//!
//! # Examples
//!
//! ```
//! use between::{is_between, is_in_range, Comparable};
//!
//! assert!(is_between(5, 1, 10));
//! assert!(!is_between(10, 1, 10));
//! assert!(is_in_range(10, 1, 10));
//!
//! assert!("am".is_between("ab", "ay"));
//! ```
//!
//! The bounds are never checked. Giving a lower bound that’s greater than
//! the upper bound is not an error, but nothing will ever be in range.

mod compare;
mod ext;
#[cfg(feature="float")] pub mod float;

pub use compare::{is_between, is_in_range, is_between_by, is_in_range_by};
pub use ext::Comparable;
