//! Digit vectors to and from floating point values

use crate::stdlib::{String, Vec};

use num_traits::float::FloatCore;

use crate::bigdigit::{DigitType, DigitVec};
use crate::Error;


/// Floating point types which can be converted to and from digits
pub trait FloatingPoint: FloatCore {
    /// 2<sup>DIGIT_BITS</sup> represented in this type
    const DIGIT_BASE: Self;

    /// Nearest floating value to digit
    fn from_digit(d: DigitType) -> Self;

    /// Truncating conversion of a value in `[0, DIGIT_BASE)` to a digit
    fn to_digit(self) -> DigitType;
}

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            const DIGIT_BASE: $t = 18446744073709551616.0;

            #[inline]
            fn from_digit(d: DigitType) -> $t {
                d as $t
            }

            #[inline]
            fn to_digit(self) -> DigitType {
                self as DigitType
            }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);


/// Digits of the integer part of a non-negative finite float
///
/// The fractional part is discarded. Non-finite and negative values
/// are rejected.
///
pub fn digits_from_floating_point<F: FloatingPoint>(value: F) -> Result<DigitVec, Error> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument(String::from(
            "cannot convert non-finite floating point value to digits"
        )));
    }
    if value < F::zero() {
        return Err(Error::InvalidArgument(String::from(
            "cannot convert negative floating point value to digits"
        )));
    }

    let mut value = value.trunc();
    let mut digits = Vec::new();
    loop {
        let digit = value % F::DIGIT_BASE;
        digits.push(digit.to_digit());
        value = (value / F::DIGIT_BASE).trunc();
        if value < F::one() {
            break;
        }
    }

    Ok(DigitVec::from_vec(digits))
}

/// Floating point value of digits
///
/// Accumulates from the most significant digit. Values beyond the range
/// of the type become positive infinity.
///
pub fn floating_point_from_digits<F: FloatingPoint>(digits: &[DigitType]) -> F {
    debug_assert!(!digits.is_empty());

    digits.iter().rev().fold(F::zero(), |acc, &d| acc * F::DIGIT_BASE + F::from_digit(d))
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::DIGIT_MAX;

    mod round_trip {
        use super::*;
        use paste::paste;

        macro_rules! impl_case {
            ($name:ident: $t:ident => $value:expr, [$($digits:expr),*]) => {
                paste! {
                    #[test]
                    fn [< $name _ $t >]() {
                        let value: $t = $value;
                        let digits = digits_from_floating_point(value).unwrap();
                        assert_eq!(digits.as_slice(), &[$($digits),*]);
                        let back: $t = floating_point_from_digits(&digits);
                        assert_eq!(back, value);
                    }
                }
            };
        }

        impl_case!(zero: f64 => 0.0, [0]);
        impl_case!(zero: f32 => 0.0, [0]);
        impl_case!(negative_zero: f64 => -0.0, [0]);
        impl_case!(one: f64 => 1.0, [1]);
        impl_case!(one: f32 => 1.0, [1]);
        impl_case!(case_123456789: f64 => 123456789.0, [123456789]);
        impl_case!(two_pow_53: f64 => 9007199254740992.0, [9007199254740992]);
        impl_case!(two_pow_64: f64 => 18446744073709551616.0, [0, 1]);
        impl_case!(two_pow_64: f32 => 18446744073709551616.0, [0, 1]);
        impl_case!(three_two_pow_100: f64 => 3.0 * 1267650600228229401496703205376.0, [0, 3 << 36]);
        impl_case!(two_pow_128: f64 => 340282366920938463463374607431768211456.0, [0, 0, 1]);
        impl_case!(f32_max: f32 => f32::MAX, [0, 18446742974197923840]);
    }

    #[test]
    fn fraction_is_truncated() {
        let digits = digits_from_floating_point(7.99f64).unwrap();
        assert_eq!(digits.as_slice(), &[7]);

        let digits = digits_from_floating_point(0.5f64).unwrap();
        assert_eq!(digits.as_slice(), &[0]);
    }

    #[test]
    fn f64_max_round_trip() {
        let digits = digits_from_floating_point(f64::MAX).unwrap();
        assert_eq!(digits.len(), 16);
        assert_eq!(floating_point_from_digits::<f64>(&digits), f64::MAX);
    }

    #[test]
    fn overflow_is_infinity() {
        let mut digits = vec![0; 16];
        digits.push(1);
        assert_eq!(floating_point_from_digits::<f64>(&digits), f64::INFINITY);
        assert_eq!(floating_point_from_digits::<f32>(&[0, 0, 1]), f32::INFINITY);
        assert_eq!(floating_point_from_digits::<f64>(&[DIGIT_MAX; 20]), f64::INFINITY);
    }

    #[test]
    fn non_finite_is_error() {
        assert!(digits_from_floating_point(f64::NAN).is_err());
        assert!(digits_from_floating_point(f64::INFINITY).is_err());
        assert!(digits_from_floating_point(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn negative_is_error() {
        let err = digits_from_floating_point(-1.5f64).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
