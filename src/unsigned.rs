// fastdiv - Fast division by divisors known only at runtime
//
// Method of "Faster Remainder by Direct Computation: Applications to
// Compilers and Software Libraries", Daniel Lemire, Owen Kaser, Nathan Kurz
// https://arxiv.org/abs/1902.01961

use crate::widening::Widening;
use crate::{DividerError, DividerInt};

/// Pre-computed inverse of a 16 or 32 bit divisor.
///
/// Both fields live in the next wider word `W`, which gives the reciprocal
/// the twice-the-divisor-width precision the method needs without any
/// multi-word arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Narrow<W> {
    divisor: W,
    reciprocal: W,
}

impl<W: Widening> Narrow<W> {
    fn new(divisor: W) -> Self {
        let one = W::one();
        // ceil(2^F / d), where F is the bit width of W. For d == 1 this
        // wraps to 0, which keeps rem and divisible exact.
        let mut reciprocal = (W::max_value() / divisor).wrapping_add(&one);
        if divisor > one && (divisor & (divisor - one)).is_zero() {
            reciprocal = reciprocal + one;
        }
        Narrow {
            divisor,
            reciprocal,
        }
    }

    #[inline]
    fn div(&self, n: W) -> W {
        debug_assert!(self.divisor > W::one(), "quotient requires a divisor magnitude > 1");
        self.reciprocal.mul_hi(n)
    }

    #[inline]
    fn rem(&self, n: W) -> W {
        let fraction = self.reciprocal.wrapping_mul(&n);
        fraction.mul_hi(self.divisor)
    }

    #[inline]
    fn div_rem(&self, n: W) -> (W, W) {
        debug_assert!(self.divisor > W::one(), "quotient requires a divisor magnitude > 1");
        let (fraction, q) = self.reciprocal.widen_mul(n);
        (q, fraction.mul_hi(self.divisor))
    }

    #[inline]
    fn divisible(&self, n: W) -> bool {
        self.reciprocal.wrapping_mul(&n) <= self.reciprocal.wrapping_sub(&W::one())
    }
}

macro_rules! narrow_divider_impl {
    ($T:ty, $W:ty) => {
        impl DividerInt for $T {
            type Inverse = Narrow<$W>;

            fn invert(self) -> Result<Self::Inverse, DividerError> {
                if self == 0 {
                    return Err(DividerError::Zero);
                }
                Ok(Narrow::new(self as $W))
            }

            fn recover(inverse: &Self::Inverse) -> Self {
                inverse.divisor as Self
            }

            #[inline]
            fn div_by(self, inverse: &Self::Inverse) -> Self {
                inverse.div(self as $W) as Self
            }

            #[inline]
            fn rem_by(self, inverse: &Self::Inverse) -> Self {
                inverse.rem(self as $W) as Self
            }

            #[inline]
            fn div_rem_by(self, inverse: &Self::Inverse) -> (Self, Self) {
                let (q, r) = inverse.div_rem(self as $W);
                (q as Self, r as Self)
            }

            #[inline]
            fn divisible_by(self, inverse: &Self::Inverse) -> bool {
                inverse.divisible(self as $W)
            }
        }
    };
}

narrow_divider_impl! { u16, u32 }
narrow_divider_impl! { u32, u64 }

/// Pre-computed inverse of a 64 bit divisor.
///
/// There is no native word twice as wide as a 128 bit reciprocal would need
/// to be multiplied in, so the reciprocal is kept as the pair `(hi, lo)` and
/// every operation accumulates partial products by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wide {
    divisor: u64,
    hi: u64,
    lo: u64,
}

/// High word of the 192 bit product `(hi, lo) * m`.
#[inline]
fn mul_hi_128(hi: u64, lo: u64, m: u64) -> u64 {
    let (hi_lo, hi_hi) = hi.widen_mul(m);
    let (_, carry) = lo.mul_hi(m).carry_add(hi_lo, false);
    hi_hi.carry_add(0, carry).0
}

impl Wide {
    fn new(divisor: u64) -> Self {
        // floor((2^128 - 1) / d), one word at a time
        let (hi, r) = (u64::MAX / divisor, u64::MAX % divisor);
        let (lo, _) = u64::widen_div(r, u64::MAX, divisor);

        let step = if divisor > 1 && divisor.is_power_of_two() {
            2
        } else {
            1
        };
        let (lo, carry) = lo.carry_add(step, false);
        let (hi, _) = hi.carry_add(0, carry);
        Wide { divisor, hi, lo }
    }

    /// `(hi, lo) * n mod 2^128`, as `(hi, lo)`.
    #[inline]
    fn fraction(&self, n: u64) -> (u64, u64) {
        let (lo, hi) = self.lo.widen_mul(n);
        (hi.wrapping_add(self.hi.wrapping_mul(n)), lo)
    }

    #[inline]
    fn div(&self, n: u64) -> u64 {
        debug_assert!(self.divisor > 1, "quotient requires a divisor magnitude > 1");
        mul_hi_128(self.hi, self.lo, n)
    }

    #[inline]
    fn rem(&self, n: u64) -> u64 {
        let (hi, lo) = self.fraction(n);
        mul_hi_128(hi, lo, self.divisor)
    }

    #[inline]
    fn div_rem(&self, n: u64) -> (u64, u64) {
        debug_assert!(self.divisor > 1, "quotient requires a divisor magnitude > 1");
        let (frac_lo, lo_hi) = self.lo.widen_mul(n);
        let (hi_lo, hi_hi) = self.hi.widen_mul(n);

        let (frac_hi, carry) = lo_hi.carry_add(hi_lo, false);
        let (q, _) = hi_hi.carry_add(0, carry);
        (q, mul_hi_128(frac_hi, frac_lo, self.divisor))
    }

    #[inline]
    fn divisible(&self, n: u64) -> bool {
        let (check_lo, borrow) = self.lo.borrow_sub(1, false);
        let (check_hi, _) = self.hi.borrow_sub(0, borrow);
        self.fraction(n) <= (check_hi, check_lo)
    }
}

impl DividerInt for u64 {
    type Inverse = Wide;

    fn invert(self) -> Result<Self::Inverse, DividerError> {
        if self == 0 {
            return Err(DividerError::Zero);
        }
        Ok(Wide::new(self))
    }

    fn recover(inverse: &Self::Inverse) -> Self {
        inverse.divisor
    }

    #[inline]
    fn div_by(self, inverse: &Self::Inverse) -> Self {
        inverse.div(self)
    }

    #[inline]
    fn rem_by(self, inverse: &Self::Inverse) -> Self {
        inverse.rem(self)
    }

    #[inline]
    fn div_rem_by(self, inverse: &Self::Inverse) -> (Self, Self) {
        inverse.div_rem(self)
    }

    #[inline]
    fn divisible_by(self, inverse: &Self::Inverse) -> bool {
        inverse.divisible(self)
    }
}
