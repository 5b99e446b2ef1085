//! Permutations of finite sets.
use std::fmt;
use std::mem::replace;
use std::ops::Mul;

use log::{debug, trace};
use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::action::{LeftAction, RightAction};
use crate::error::{ParseError, PermError};
use crate::parse::parse_cycles;
use crate::El;

/// A permutation of a finite set.
///
/// A permutation rearranges the elements of a finite set. It is a bijection from a set to the same
/// set.
///
/// In permalg these sets are always {1, ..., n} for some n, called the size of the permutation.
/// Permutations of different sizes are different values and cannot be composed with each other.
///
/// Internally a permutation is stored as a boxed slice containing the images of 1, ..., n. Every
/// constructor checks that this slice is a bijection, and a permutation is never modified after
/// construction.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Perm {
    // images[j - 1] is the image of j
    images: Box<[El]>,
}

// Powers with more steps than this are computed by squaring
const MAX_ACCUMULATED_STEPS: u128 = 64;

fn rejected(err: PermError) -> PermError {
    debug!("rejected permutation: {}", err);
    err
}

// Keeping the size a valid El allows 1-based elements to be computed without overflow
fn check_size(size: usize) -> Result<(), PermError> {
    let max = El::max_value() as usize;
    if size > max {
        return Err(rejected(PermError::SizeTooLarge { size, max }));
    }
    Ok(())
}

impl Perm {
    /// The identity permutation of size 0.
    pub fn new() -> Perm {
        Perm::default()
    }

    /// The identity permutation of {1, ..., size}.
    ///
    /// # Panics
    ///
    /// Panics if `size` is larger than the largest [`El`]. [`Perm::from_cycles`] with an empty
    /// string returns an error instead.
    pub fn identity(size: usize) -> Perm {
        assert!(size <= El::max_value() as usize);
        Perm {
            images: (1..=size as El).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 1..=n.
    ///
    /// Returns an error if the vector does not correspond to a permutation.
    pub fn from_vec(images: Vec<El>) -> Result<Perm, PermError> {
        Self::from_vec_with_scratch(images, &mut vec![])
    }

    /// Create a permutation from a vector containing the images of 1..=n.
    ///
    /// Returns an error if the vector does not correspond to a permutation.
    /// The last parameter is used as scratch space and will be overwritten.
    pub fn from_vec_with_scratch(
        images: Vec<El>,
        scratch: &mut Vec<bool>,
    ) -> Result<Perm, PermError> {
        let size = images.len();
        check_size(size)?;
        let seen = scratch;
        seen.clear();
        seen.resize(size, false);

        for &image in images.iter() {
            if image == 0 || image as usize > size {
                return Err(rejected(PermError::ImageOutOfRange { image, size }));
            }
            if replace(&mut seen[image as usize - 1], true) {
                return Err(rejected(PermError::DuplicateImage { image }));
            }
        }

        Ok(Perm {
            images: images.into_boxed_slice(),
        })
    }

    /// Create a permutation of {1, ..., size} from the images of its elements.
    ///
    /// Unlike [`Perm::from_vec`] the size is stated explicitly and the number of images must
    /// match it.
    pub fn from_images(images: &[El], size: usize) -> Result<Perm, PermError> {
        if images.len() != size {
            return Err(rejected(PermError::LengthMismatch {
                expected: size,
                actual: images.len(),
            }));
        }
        Self::from_vec(images.to_vec())
    }

    /// Create a permutation of {1, ..., size} from cycle notation such as `(1 5)(2 3)`.
    ///
    /// Starting from the identity, each cycle `(a1 a2 ... ak)` maps `a1` to `a2`, ..., `ak` to
    /// `a1`. Cycles are applied in the order they are written. Cycles need not be disjoint: when
    /// an element appears in several cycles, the last assignment of its image wins. The result
    /// must still be a permutation, otherwise an error is returned.
    ///
    /// An empty string produces the identity.
    pub fn from_cycles(notation: &str, size: usize) -> Result<Perm, PermError> {
        check_size(size)?;
        let cycles = parse_cycles(notation).map_err(|err| rejected(err.into()))?;

        for &element in cycles.iter().flatten() {
            if element == 0 || element as usize > size {
                return Err(rejected(
                    ParseError::ElementOutOfRange { element, size }.into(),
                ));
            }
        }

        let mut images = Vec::from(Perm::identity(size));
        for cycle in cycles.iter() {
            for (i, &el) in cycle.iter().enumerate() {
                images[el as usize - 1] = cycle[(i + 1) % cycle.len()];
            }
        }

        Self::from_vec(images)
    }

    /// The number of elements this permutation acts on.
    pub fn size(&self) -> usize {
        self.images.len()
    }

    /// Whether every element is a fixed point.
    pub fn is_identity(&self) -> bool {
        self.images
            .iter()
            .enumerate()
            .all(|(i, &image)| image as usize == i + 1)
    }

    /// The images of 1, ..., n in order.
    pub fn as_slice(&self) -> &[El] {
        &self.images
    }

    /// The image of an element.
    ///
    /// Returns an error unless `1 <= el <= size`.
    pub fn image_of(&self, el: El) -> Result<El, PermError> {
        el.checked_sub(1)
            .and_then(|index| self.images.get(index as usize))
            .cloned()
            .ok_or(PermError::ElementOutOfRange {
                element: el,
                size: self.size(),
            })
    }

    // Callers guarantee 1 <= el <= size
    fn image(&self, el: El) -> El {
        self.images[el as usize - 1]
    }

    /// The composition `self ∘ other`, which first applies `other` and then `self`.
    ///
    /// Returns an error if the permutations have different sizes.
    pub fn compose(&self, other: &Perm) -> Result<Perm, PermError> {
        if self.size() != other.size() {
            return Err(PermError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(self.compose_unchecked(other))
    }

    fn compose_unchecked(&self, other: &Perm) -> Perm {
        Perm {
            images: other.images.iter().map(|&el| self.image(el)).collect(),
        }
    }

    /// The inverse of this permutation.
    pub fn inverse(&self) -> Perm {
        let mut images = vec![0; self.size()].into_boxed_slice();
        for (i, &image) in self.images.iter().enumerate() {
            images[image as usize - 1] = i as El + 1;
        }
        Perm { images }
    }

    /// A power of this permutation.
    ///
    /// The magnitude of the exponent is reduced modulo the [order](Perm::order). Small powers are
    /// accumulated from the identity by composing with `self` on the right once per step, larger
    /// ones use exponentiation by squaring. Negative exponents invert the result at the end.
    pub fn pow<E>(&self, exponent: E) -> Perm
    where
        E: Integer + ToPrimitive + FromPrimitive,
    {
        let neg = exponent < E::zero();

        let order = self.checked_order();
        // p^order is the identity, so only the remainder matters
        let exponent = match order.and_then(E::from_u128) {
            Some(order) => exponent % order,
            None => exponent,
        };
        // Negating in E overflows for E::MIN, so primitive exponents go through i128
        let magnitude = match exponent.to_i128() {
            Some(exponent) => Some(exponent.unsigned_abs()),
            None => exponent.to_u128(),
        };
        trace!(
            "power of a permutation with order {:?}, magnitude {:?}",
            order,
            magnitude
        );

        let result = match magnitude {
            Some(magnitude) => {
                let steps = match order {
                    Some(order) => magnitude % order,
                    None => magnitude,
                };
                if steps <= MAX_ACCUMULATED_STEPS {
                    self.accumulate_power(steps)
                } else {
                    self.power_by_squaring(steps)
                }
            }
            // Only reachable for exponents wider than 128 bits, which can be negated safely
            None if neg => self.power_by_squaring(E::zero() - exponent),
            None => self.power_by_squaring(exponent),
        };

        if neg {
            result.inverse()
        } else {
            result
        }
    }

    fn accumulate_power(&self, steps: u128) -> Perm {
        let mut result = Perm::identity(self.size());
        for _ in 0..steps {
            result = result.compose_unchecked(self);
        }
        result
    }

    // Requires a non-negative exponent
    fn power_by_squaring<M: Integer>(&self, mut exponent: M) -> Perm {
        let two = M::one() + M::one();
        let mut result = Perm::identity(self.size());
        let mut square = self.clone();
        loop {
            let (half, bit) = exponent.div_rem(&two);
            if !bit.is_zero() {
                result = result.compose_unchecked(&square);
            }
            if half.is_zero() {
                return result;
            }
            square = square.compose_unchecked(&square);
            exponent = half;
        }
    }

    /// The order of this permutation, i.e. the smallest positive exponent whose power is the
    /// identity.
    ///
    /// This is the least common multiple of all cycle lengths.
    ///
    /// # Panics
    ///
    /// Panics if the order does not fit in a `u128`. Use [`Perm::checked_order`] for very large
    /// permutations.
    pub fn order(&self) -> u128 {
        match self.checked_order() {
            Some(order) => order,
            None => panic!("permutation order exceeds u128"),
        }
    }

    /// The order of this permutation, or `None` if it does not fit in a `u128`.
    pub fn checked_order(&self) -> Option<u128> {
        self.cycles().try_fold(1u128, |order, cycle| {
            let len = cycle.count() as u128;
            (order / order.gcd(&len)).checked_mul(len)
        })
    }

    /// Return the cycle starting at an element.
    ///
    /// Returns a 1-cycle when the element is a fixed point and an error when it is out of range.
    pub fn cycle_at(&self, el: El) -> Result<Cycle, PermError> {
        self.image_of(el)?;
        Ok(Cycle {
            perm: self,
            pos: Some(el),
            start: el,
        })
    }

    /// Returns an iterator over all proper cycles of a permutation.
    ///
    /// The returned iterator does not produce any 1-cycles. Every cycle starts with its smallest
    /// element and cycles are produced in increasing order of their smallest element.
    pub fn cycles(&self) -> Cycles {
        self.cycles_with_scratch(Default::default())
    }

    /// Return an iterator over all proper cycles of a permutation. Use existing scratch space.
    ///
    /// The ownership of the scratch space is passed to the returned iterator and can be recovered
    /// by [`Cycles::into_scratch`].
    pub fn cycles_with_scratch(&self, mut scratch: Vec<bool>) -> Cycles {
        scratch.clear();
        scratch.resize(self.size(), false);
        Cycles {
            perm: self,
            seen: scratch,
            pos: 0,
        }
    }

    /// The proper cycles of this permutation as vectors.
    pub fn decomp_list(&self) -> Vec<Vec<El>> {
        self.cycles().map(|cycle| cycle.collect()).collect()
    }

    /// The cycle decomposition, e.g. `(1 6 3)(4 5)`.
    ///
    /// The identity has an empty decomposition.
    pub fn decomposition(&self) -> Decomposition {
        Decomposition { perm: self }
    }

    /// Emit the cycle notation of this permutation to a [`Formatter`][fmt::Formatter]. Use
    /// existing scratch space.
    ///
    /// Unlike [`Perm::decomposition`] the identity is written as `()`.
    pub fn format_with_scratch(
        &self,
        f: &mut fmt::Formatter,
        scratch: &mut Vec<bool>,
    ) -> fmt::Result {
        let mut cycles = self.cycles_with_scratch(replace(scratch, Default::default()));

        let mut empty = true;

        while let Some(cycle) = cycles.next() {
            empty = false;
            fmt::Display::fmt(&cycle, f)?;
        }

        *scratch = cycles.into_scratch();

        if empty {
            f.write_str("()")?;
        }

        Ok(())
    }
}

impl From<Perm> for Vec<El> {
    fn from(perm: Perm) -> Vec<El> {
        perm.images.into_vec()
    }
}

/// Application of a permutation to an element.
impl LeftAction<El> for Perm {
    type Error = PermError;

    fn left_apply(&self, el: El) -> Result<El, PermError> {
        self.image_of(el)
    }
}

/// Composition of a permutation on the left: `p.left_apply(&q)` is `p ∘ q`.
impl<'a> LeftAction<&'a Perm> for Perm {
    type Error = PermError;

    fn left_apply(&self, perm: &'a Perm) -> Result<Perm, PermError> {
        self.compose(perm)
    }
}

/// Composition of a permutation on the right: `p.right_apply(&q)` is `q ∘ p`.
impl<'a> RightAction<&'a Perm> for Perm {
    type Error = PermError;

    fn right_apply(&self, perm: &'a Perm) -> Result<Perm, PermError> {
        perm.compose(self)
    }
}

/// `p * q` is the composition `p ∘ q`.
impl<'a, 'b> Mul<&'b Perm> for &'a Perm {
    type Output = Result<Perm, PermError>;

    fn mul(self, other: &'b Perm) -> Result<Perm, PermError> {
        self.compose(other)
    }
}

impl Mul for Perm {
    type Output = Result<Perm, PermError>;

    fn mul(self, other: Perm) -> Result<Perm, PermError> {
        self.compose(&other)
    }
}

/// One line `i -> p(i)` per element, in increasing order of `i`.
impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, image) in self.images.iter().enumerate() {
            writeln!(f, "{} -> {}", i + 1, image)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format_with_scratch(f, &mut Default::default())
    }
}

/// Iterator over the elements of a permutation's cycle.
#[derive(Clone)]
pub struct Cycle<'a> {
    perm: &'a Perm,
    pos: Option<El>,
    start: El,
}

impl<'a> Iterator for Cycle<'a> {
    type Item = El;

    fn next(&mut self) -> Option<El> {
        self.pos.map(|pos| {
            let next = self.perm.image(pos);
            self.pos = if next == self.start { None } else { Some(next) };

            pos
        })
    }
}

impl<'a> fmt::Display for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for el in self.clone() {
            f.write_str(if first { "(" } else { " " })?;
            first = false;
            fmt::Display::fmt(&el, f)?;
        }
        f.write_str(if first { "()" } else { ")" })
    }
}

impl<'a> fmt::Debug for Cycle<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the cycles of a permutation.
#[derive(Clone)]
pub struct Cycles<'a> {
    perm: &'a Perm,
    seen: Vec<bool>,
    // 0-based index of the next candidate start
    pos: usize,
}

impl<'a> Cycles<'a> {
    /// Recover the scratch space needed for efficient iteration over the cycles of a permutation.
    pub fn into_scratch(self) -> Vec<bool> {
        self.seen
    }
}

impl<'a> Iterator for Cycles<'a> {
    type Item = Cycle<'a>;

    fn next(&mut self) -> Option<Cycle<'a>> {
        loop {
            if self.pos >= self.perm.size() {
                return None;
            }
            let start = self.pos as El + 1;
            let seen = self.seen[self.pos];
            self.pos += 1;

            if !seen && self.perm.image(start) != start {
                let cycle = Cycle {
                    perm: self.perm,
                    pos: Some(start),
                    start,
                };
                for el in cycle.clone() {
                    self.seen[el as usize - 1] = true;
                }
                return Some(cycle);
            }
        }
    }
}

/// Displayable cycle decomposition of a permutation.
///
/// Cycles are written as `(e1 e2 ... ek)` without separators between them. Fixed points are
/// omitted, so the identity is written as the empty string.
#[derive(Clone, Copy)]
pub struct Decomposition<'a> {
    perm: &'a Perm,
}

impl<'a> fmt::Display for Decomposition<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cycle in self.perm.cycles() {
            fmt::Display::fmt(&cycle, f)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Debug for Decomposition<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
