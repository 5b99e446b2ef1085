//! Errors returned by permutation constructors and operations.
use thiserror::Error;

use crate::El;

/// Failure to tokenize or parse cycle notation.
///
/// Offsets are byte offsets into the parsed string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid element {token:?} at offset {offset}, expected a decimal number")]
    InvalidToken { token: String, offset: usize },
    #[error("Element outside of a cycle at offset {offset}")]
    ElementOutsideCycle { offset: usize },
    #[error("Nested cycle at offset {offset}")]
    NestedCycle { offset: usize },
    #[error("Unmatched ')' at offset {offset}")]
    UnmatchedClose { offset: usize },
    #[error("Cycle opened at offset {offset} is never closed")]
    UnterminatedCycle { offset: usize },
    #[error("Cycle element out of range, expected a value between 1 and {size} but got {element}")]
    ElementOutOfRange { element: El, size: usize },
}

/// Errors of permutation construction and algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermError {
    #[error("Invalid permutation, expected {expected} images but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Invalid permutation, image out of range, expected a value between 1 and {size} but got {image}")]
    ImageOutOfRange { image: El, size: usize },
    #[error("Permutation too large, expected at most {max} elements but got {size}")]
    SizeTooLarge { size: usize, max: usize },
    #[error("Invalid permutation, {image} is the image of more than one element")]
    DuplicateImage { image: El },
    #[error("Invalid cycle notation: {0}")]
    Parse(#[from] ParseError),
    #[error("Mismatched permutation sizes {left} and {right}")]
    SizeMismatch { left: usize, right: usize },
    #[error("Element out of range, expected a value between 1 and {size} but got {element}")]
    ElementOutOfRange { element: El, size: usize },
}
