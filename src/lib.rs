// fastdiv - Fast division by divisors known only at runtime
//
// Method of "Faster Remainder by Direct Computation: Applications to
// Compilers and Software Libraries", Daniel Lemire, Owen Kaser, Nathan Kurz
// https://arxiv.org/abs/1902.01961

//! Fast division, modulus and divisibility checks for divisors known only
//! at runtime.
//!
//! A [`Divider`] pre-computes an approximate inverse of the divisor such that
//! the quotient is the high part of one multiplication and the remainder is
//! the fraction held in the low part multiplied back by the divisor. The
//! inverse needs twice the width of the divisor: 16 and 32 bit divisors get
//! it for free from the next wider native word, 64 bit divisors carry a two
//! word inverse and pay for a few extra multiplications.
//!
//! Constructing a divider costs one hardware division; every later
//! operation is a handful of multiplications, so the divider pays off when
//! the same divisor is reused.
//!
//! ```
//! use fastdiv::Divider;
//!
//! let divisor: u32 = 3;
//!
//! // initialize a divider at runtime
//! let d = Divider::<u32>::new(divisor).unwrap();
//!
//! // use it repeatedly
//! let mut total = 0;
//! let mut multiples = Vec::new();
//! for i in 1..10u32 {
//!     total += d.div(i);
//!     if d.divisible(i) {
//!         multiples.push(i);
//!     }
//! }
//! assert_eq!(multiples, [3, 6, 9]);
//! assert_eq!(total, 12);
//! ```
//!
//! # Supported divisors
//!
//! | operation     | unsigned      | signed                  |
//! |---------------|---------------|-------------------------|
//! | [`Divider::div`], [`Divider::div_rem`] | `d > 1` | `d` not in `{0, 1, -1, MIN}` |
//! | [`Divider::rem`]                       | `d > 0` | `d` not in `{0, -1, MIN}`    |
//! | [`Divider::divisible`]                 | `d > 0` | `d != 0`                     |
//!
//! Divisors outside these sets are not checked in release builds; the
//! results are unspecified. Debug builds assert on magnitude 1 for the
//! quotient operations.

mod signed;
mod unsigned;
mod widening;

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::PrimInt;

pub use crate::signed::Signed;
pub use crate::unsigned::{Narrow, Wide};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerError {
    #[error("divider must be != 0")]
    Zero,
}

/// Integer kinds a [`Divider`] can be built for.
pub trait DividerInt: PrimInt + Debug + Hash {
    /// Pre-computed inverse of a divisor of this kind.
    type Inverse: Copy + Debug + Eq + Hash + Send + Sync;

    fn invert(self) -> Result<Self::Inverse, DividerError>;
    fn recover(inverse: &Self::Inverse) -> Self;

    fn div_by(self, inverse: &Self::Inverse) -> Self;
    fn rem_by(self, inverse: &Self::Inverse) -> Self;
    fn div_rem_by(self, inverse: &Self::Inverse) -> (Self, Self);
    fn divisible_by(self, inverse: &Self::Inverse) -> bool;
}

/// A divisor with its pre-computed inverse.
///
/// Immutable once built; copy it or share it between threads freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Divider<T: DividerInt> {
    inverse: T::Inverse,
}

impl<T: DividerInt> From<T> for Divider<T> {
    /// # Panics
    ///
    /// Panics if `d` is zero.
    fn from(d: T) -> Self {
        Self::new(d).unwrap()
    }
}

impl<T: DividerInt> Divider<T> {
    pub fn new(d: T) -> Result<Self, DividerError> {
        Ok(Divider {
            inverse: d.invert()?,
        })
    }

    /// The divisor this divider was built from.
    pub fn recover(&self) -> T {
        T::recover(&self.inverse)
    }

    /// `n / d`, truncated toward zero.
    ///
    /// The divisor must not be `1`, `-1` or the signed minimum.
    #[inline]
    pub fn div(&self, n: T) -> T {
        n.div_by(&self.inverse)
    }

    /// `n % d`. The sign of a non-zero remainder follows `n`.
    ///
    /// The divisor must not be `-1` or the signed minimum.
    #[inline]
    pub fn rem(&self, n: T) -> T {
        n.rem_by(&self.inverse)
    }

    /// `(n / d, n % d)`, sharing one multiplication between the two.
    ///
    /// Same divisor restrictions as [`Divider::div`].
    #[inline]
    pub fn div_rem(&self, n: T) -> (T, T) {
        n.div_rem_by(&self.inverse)
    }

    /// Whether `n % d == 0`, without computing the remainder.
    #[inline]
    pub fn divisible(&self, n: T) -> bool {
        n.divisible_by(&self.inverse)
    }
}

macro_rules! divider_ops_impl {
    ($($T:ty)*) => {$(
        impl std::ops::Div<&Divider<$T>> for $T {
            type Output = Self;

            #[inline]
            fn div(self, denom: &Divider<$T>) -> Self::Output {
                denom.div(self)
            }
        }

        impl std::ops::Div<Divider<$T>> for $T {
            type Output = Self;

            #[inline]
            fn div(self, denom: Divider<$T>) -> Self::Output {
                denom.div(self)
            }
        }

        impl std::ops::Rem<&Divider<$T>> for $T {
            type Output = Self;

            #[inline]
            fn rem(self, denom: &Divider<$T>) -> Self::Output {
                denom.rem(self)
            }
        }

        impl std::ops::Rem<Divider<$T>> for $T {
            type Output = Self;

            #[inline]
            fn rem(self, denom: Divider<$T>) -> Self::Output {
                denom.rem(self)
            }
        }
    )*};
}

divider_ops_impl! { u16 u32 u64 i16 i32 i64 }
