//! Code for num_traits

use num_traits::{CheckedDiv, CheckedRem, FromPrimitive, Num, Signed, ToPrimitive};

use crate::stdlib::convert::TryFrom;

use crate::convert::{floating_point_from_digits, integral_from_digits};
use crate::{Error, FloatingPoint, Integer, One, Sign, Zero};


impl Num for Integer {
    type FromStrRadixErr = Error;

    /// Creates and initializes an Integer.
    ///
    /// A radix of `0` detects the base from the prefix.
    ///
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Integer, Error> {
        Integer::from_str_radix(s, radix)
    }
}

impl Integer {
    /// Magnitude as u128, if it fits
    fn magnitude_u128(&self) -> Option<u128> {
        if self.digit_count() > 2 {
            None
        } else {
            Some(integral_from_digits(self.magnitude()))
        }
    }

    fn to_floating_point<F: FloatingPoint>(&self) -> F {
        let magnitude: F = floating_point_from_digits(self.magnitude());
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign() {
            Sign::Negative if magnitude <= 1 << 127 => Some((magnitude as i128).wrapping_neg()),
            Sign::Negative => None,
            _ => i128::try_from(magnitude).ok(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        self.magnitude_u128()
    }

    /// Nearest f32, saturating to infinity
    fn to_f32(&self) -> Option<f32> {
        Some(self.to_floating_point())
    }

    /// Nearest f64, saturating to infinity
    fn to_f64(&self) -> Option<f64> {
        Some(self.to_floating_point())
    }
}

impl FromPrimitive for Integer {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(Integer::from(n))
    }

    /// Truncated toward zero, `None` if not finite
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        Integer::try_from(n).ok()
    }

    /// Truncated toward zero, `None` if not finite
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        Integer::try_from(n).ok()
    }
}

impl Signed for Integer {
    #[inline]
    fn abs(&self) -> Integer {
        Integer::abs(self)
    }

    fn abs_sub(&self, other: &Integer) -> Integer {
        if self <= other {
            Integer::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Integer {
        match self.sign() {
            Sign::Negative => -Integer::one(),
            Sign::Zero => Integer::zero(),
            Sign::Positive => Integer::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Integer::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }
}

impl CheckedDiv for Integer {
    #[inline]
    fn checked_div(&self, v: &Integer) -> Option<Integer> {
        Integer::checked_div(self, v)
    }
}

impl CheckedRem for Integer {
    #[inline]
    fn checked_rem(&self, v: &Integer) -> Option<Integer> {
        Integer::checked_rem(self, v)
    }
}
