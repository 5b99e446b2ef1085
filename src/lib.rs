//! A permutation algebra library
//!
//! This crate provides a value type for permutations of {1, ..., n} together with the usual
//! algebra on them: composition, inversion, powers, orders and cycle decompositions.
//!
//! Permutations can be built from the list of images or from cycle notation:
//!
//! ```
//! use permalg::Perm;
//!
//! let p = Perm::from_vec(vec![6, 2, 1, 5, 4, 3]).unwrap();
//! assert_eq!(p.decomposition().to_string(), "(1 6 3)(4 5)");
//! assert_eq!(p.order(), 6);
//!
//! let q = Perm::from_cycles("(1 5)(2 3)", 6).unwrap();
//! assert_eq!(p.compose(&q).unwrap().image_of(1).unwrap(), 4);
//! ```
pub mod action;
pub mod error;
pub mod parse;
pub mod perm;

pub use crate::error::{ParseError, PermError};
pub use crate::perm::Perm;

/// Set element.
///
/// Set elements are represented by positive integers (`u32`). A permutation of size n acts on
/// {1, ..., n}.
pub type El = u32;
