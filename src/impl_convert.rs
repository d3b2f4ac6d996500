//! Code for implementing From/To Integers

use crate::*;
use stdlib::convert::TryFrom;

use num_traits::float::FloatCore;

#[cfg(feature = "num-bigint")]
use num_bigint::{BigInt, BigUint};


macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                Integer::from_sign_magnitude(Sign::Positive, n as u128)
            }
        }

        impl From<&$t> for Integer {
            fn from(n: &$t) -> Self {
                Integer::from(*n)
            }
        }
    };
}

macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for Integer {
            fn from(n: $t) -> Self {
                let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                Integer::from_sign_magnitude(sign, n.unsigned_abs() as u128)
            }
        }

        impl From<&$t> for Integer {
            fn from(n: &$t) -> Self {
                Integer::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);
impl_from_int_primitive!(isize);

impl From<DigitVec> for Integer {
    fn from(digits: DigitVec) -> Self {
        Integer::new(Sign::Positive, digits)
    }
}


macro_rules! impl_try_from_floating_primitive {
    ($t:ty) => {
        impl TryFrom<$t> for Integer {
            type Error = Error;

            /// Truncates toward zero; fails for NaN and infinities
            fn try_from(n: $t) -> Result<Self, Error> {
                let sign = if n < 0.0 { Sign::Negative } else { Sign::Positive };
                let digits = convert::digits_from_floating_point(FloatCore::abs(n))?;
                Ok(Integer::new(sign, digits))
            }
        }
    };
}

impl_try_from_floating_primitive!(f32);
impl_try_from_floating_primitive!(f64);


#[cfg(feature = "num-bigint")]
impl From<&BigUint> for Integer {
    fn from(n: &BigUint) -> Self {
        Integer::new(Sign::Positive, DigitVec::from_vec(n.to_u64_digits()))
    }
}

#[cfg(feature = "num-bigint")]
impl From<BigUint> for Integer {
    fn from(n: BigUint) -> Self {
        Integer::from(&n)
    }
}

#[cfg(feature = "num-bigint")]
impl From<&BigInt> for Integer {
    fn from(n: &BigInt) -> Self {
        let sign = match n.sign() {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        };
        Integer::new(sign, DigitVec::from_vec(n.magnitude().to_u64_digits()))
    }
}

#[cfg(feature = "num-bigint")]
impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Integer::from(&n)
    }
}

#[cfg(feature = "num-bigint")]
impl From<&Integer> for BigInt {
    fn from(n: &Integer) -> Self {
        let sign = match n.sign() {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Zero => num_bigint::Sign::NoSign,
            Sign::Positive => num_bigint::Sign::Plus,
        };
        BigInt::from_biguint(sign, biguint_from_digits(n.magnitude()))
    }
}

#[cfg(feature = "num-bigint")]
impl From<Integer> for BigInt {
    fn from(n: Integer) -> Self {
        BigInt::from(&n)
    }
}

/// BigUint stores 32-bit digits, split each of ours in two
#[cfg(feature = "num-bigint")]
fn biguint_from_digits(digits: &[DigitType]) -> BigUint {
    let mut halves = stdlib::Vec::with_capacity(digits.len() * 2);
    for &d in digits {
        halves.push(d as u32);
        halves.push((d >> 32) as u32);
    }
    BigUint::new(halves)
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty => $value:expr, $sign:ident [$($digits:expr),*]) => {
            #[test]
            fn $name() {
                let value: $t = $value;
                let n = Integer::from(value);
                assert_eq!(n.sign(), Sign::$sign);
                assert_eq!(n.magnitude(), &[$($digits),*]);

                let n = Integer::from(&value);
                assert_eq!(n.sign(), Sign::$sign);
            }
        };
    }

    impl_case!(case_u8_0: u8 => 0, Zero [0]);
    impl_case!(case_u8_max: u8 => u8::MAX, Positive [255]);
    impl_case!(case_u64_max: u64 => u64::MAX, Positive [u64::MAX]);
    impl_case!(case_u128_max: u128 => u128::MAX, Positive [u64::MAX, u64::MAX]);
    impl_case!(case_usize_7: usize => 7, Positive [7]);
    impl_case!(case_i8_min: i8 => i8::MIN, Negative [128]);
    impl_case!(case_i32_n1: i32 => -1, Negative [1]);
    impl_case!(case_i64_min: i64 => i64::MIN, Negative [1 << 63]);
    impl_case!(case_i128_min: i128 => i128::MIN, Negative [0, 1 << 63]);
    impl_case!(case_i128_max: i128 => i128::MAX, Positive [u64::MAX, u64::MAX >> 1]);
    impl_case!(case_isize_0: isize => 0, Zero [0]);

    mod try_from_float {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $value:expr => $expected:expr) => {
                #[test]
                fn $name() {
                    let n = Integer::try_from($value).unwrap();
                    assert_eq!(n, Integer::from($expected));
                }
            };
        }

        impl_case!(case_0: 0.0f64 => 0);
        impl_case!(case_n0: -0.0f64 => 0);
        impl_case!(case_2d9: 2.9f64 => 2);
        impl_case!(case_n2d9: -2.9f64 => -2);
        impl_case!(case_n0d5: -0.5f32 => 0);
        impl_case!(case_2_pow_64: 18446744073709551616.0f64 => 1u128 << 64);
        impl_case!(case_n2_pow_100: -1267650600228229401496703205376.0f64 => -(1i128 << 100));

        #[test]
        fn non_finite_is_error() {
            assert!(Integer::try_from(f64::NAN).is_err());
            assert!(Integer::try_from(f64::INFINITY).is_err());
            assert!(Integer::try_from(f32::NEG_INFINITY).is_err());
        }
    }

    #[cfg(feature = "num-bigint")]
    mod bigint {
        use super::*;

        #[test]
        fn round_trip() {
            for s in ["0", "1", "-1", "18446744073709551616", "-340282366920938463463374607431768211457"] {
                let big: BigInt = s.parse().unwrap();
                let n = Integer::from(&big);
                assert_eq!(n.to_string(), s);
                assert_eq!(BigInt::from(&n), big);
            }
        }
    }
}
