// fastdiv - Fast division by divisors known only at runtime
//
// Method of "Faster Remainder by Direct Computation: Applications to
// Compilers and Software Libraries", Daniel Lemire, Owen Kaser, Nathan Kurz
// https://arxiv.org/abs/1902.01961

use std::ops::Neg;

use num_traits::{PrimInt, WrappingSub};

use crate::{DividerError, DividerInt};

/// Pre-computed inverse of a signed divisor: the unsigned inverse of its
/// magnitude plus the divisor's sign.
///
/// `d` and `-d` share the same `magnitude`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signed<I> {
    magnitude: I,
    negative: bool,
}

/// `-x` if `negative`, else `x`, without branching.
#[inline]
fn negate_if<T>(x: T, negative: bool) -> T
where
    T: PrimInt + WrappingSub + Neg<Output = T> + From<bool>,
{
    // all bits set when negative
    let sign = -<T as From<bool>>::from(negative);
    (x ^ sign).wrapping_sub(&sign)
}

macro_rules! signed_divider_impl {
    ($T:ty, $U:ty) => {
        impl DividerInt for $T {
            type Inverse = Signed<<$U as DividerInt>::Inverse>;

            fn invert(self) -> Result<Self::Inverse, DividerError> {
                let magnitude = self.unsigned_abs().invert()?;
                Ok(Signed {
                    magnitude,
                    negative: self < 0,
                })
            }

            fn recover(inverse: &Self::Inverse) -> Self {
                let abs_d = <$U as DividerInt>::recover(&inverse.magnitude) as Self;
                negate_if(abs_d, inverse.negative)
            }

            #[inline]
            fn div_by(self, inverse: &Self::Inverse) -> Self {
                let q = self.unsigned_abs().div_by(&inverse.magnitude) as Self;
                negate_if(q, inverse.negative ^ (self < 0))
            }

            #[inline]
            fn rem_by(self, inverse: &Self::Inverse) -> Self {
                let r = self.unsigned_abs().rem_by(&inverse.magnitude) as Self;
                negate_if(r, self < 0)
            }

            #[inline]
            fn div_rem_by(self, inverse: &Self::Inverse) -> (Self, Self) {
                let (q, r) = self.unsigned_abs().div_rem_by(&inverse.magnitude);
                (
                    negate_if(q as Self, inverse.negative ^ (self < 0)),
                    negate_if(r as Self, self < 0),
                )
            }

            #[inline]
            fn divisible_by(self, inverse: &Self::Inverse) -> bool {
                self.unsigned_abs().divisible_by(&inverse.magnitude)
            }
        }
    };
}

signed_divider_impl! { i16, u16 }
signed_divider_impl! { i32, u32 }
signed_divider_impl! { i64, u64 }
