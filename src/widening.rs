// fastdiv - Fast division by divisors known only at runtime
//
// Method of "Faster Remainder by Direct Computation: Applications to
// Compilers and Software Libraries", Daniel Lemire, Owen Kaser, Nathan Kurz
// https://arxiv.org/abs/1902.01961

//! Double-word arithmetic on native words.

use num_integer::Integer;
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingMul, WrappingSub};

/// Arithmetic producing (or consuming) a result twice as wide as `Self`.
pub(crate) trait Widening: PrimInt + Unsigned + WrappingAdd + WrappingSub + WrappingMul {
    type WideT;

    /// Full product of `self * rhs` as `(lo, hi)`.
    fn widen_mul(self, rhs: Self) -> (Self, Self);

    fn carry_add(self, rhs: Self, carry: bool) -> (Self, bool);

    fn borrow_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Divides the double word `(hi, lo)` by `d`, returning `(quotient, remainder)`.
    ///
    /// `hi` must be less than `d`, otherwise the quotient does not fit in one word.
    fn widen_div(hi: Self, lo: Self, d: Self) -> (Self, Self);

    /// High half of `self * rhs`.
    #[inline]
    fn mul_hi(self, rhs: Self) -> Self {
        self.widen_mul(rhs).1
    }
}

macro_rules! uint_widening_impl {
    ($SelfT:ty, $WideT:ty) => {
        impl Widening for $SelfT {
            type WideT = $WideT;

            #[inline]
            fn widen_mul(self, rhs: Self) -> (Self, Self) {
                let wide = (self as Self::WideT) * (rhs as Self::WideT);
                (wide as Self, (wide >> Self::BITS) as Self)
            }

            #[inline]
            fn carry_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (a, b) = self.overflowing_add(rhs);
                let (c, d) = a.overflowing_add(carry as Self);
                (c, b || d)
            }

            #[inline]
            fn borrow_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (a, b) = self.overflowing_sub(rhs);
                let (c, d) = a.overflowing_sub(borrow as Self);
                (c, b || d)
            }

            #[inline]
            fn widen_div(hi: Self, lo: Self, d: Self) -> (Self, Self) {
                debug_assert!(hi < d, "double word division overflows");
                let n = ((hi as Self::WideT) << Self::BITS) | lo as Self::WideT;
                let (q, r) = n.div_rem(&(d as Self::WideT));
                (q as Self, r as Self)
            }
        }
    };
}

uint_widening_impl! { u32, u64 }
uint_widening_impl! { u64, u128 }
