//! Subtraction of digit vectors
//!
//! Magnitudes are unsigned, so `a - b` with `b > a` runs off the top of
//! the minuend leaving a borrow. The partial result is then the
//! base-complement of the true difference and one more pass negates it
//! (invert every digit and add one), giving the magnitude `b - a` with
//! sign [`Sign::Negative`].
//!

use crate::stdlib::Vec;

use crate::bigdigit::digitvec::strip_significant_zeros;
use crate::bigdigit::radix::{add_carry_into_slice, sub_with_borrow};
use crate::bigdigit::{AccumulatorType, DigitType, DigitVec};
use crate::convert::floating::{digits_from_floating_point, FloatingPoint};
use crate::convert::integral::split_integral;
use crate::sign::Sign;
use crate::Error;

use super::addition::add;
use super::sign_from_digits;


/// Difference of two digit slices as (sign, magnitude)
pub fn subtract(a: &[DigitType], b: &[DigitType]) -> (Sign, DigitVec) {
    let mut digits = a.to_vec();
    let sign = subtract_in_place(&mut digits, b);
    (sign, DigitVec::from_vec(digits))
}

/// Replace `a` with the magnitude of `a - b`, returning its sign
///
/// On return `a` is normalized: no significant zeros, and exactly `[0]`
/// when the sign is [`Sign::Zero`].
///
pub fn subtract_in_place(a: &mut Vec<DigitType>, b: &[DigitType]) -> Sign {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut borrow = false;
    for (a_digit, &b_digit) in a.iter_mut().zip(b.iter()) {
        *a_digit = sub_with_borrow(*a_digit, b_digit, &mut borrow);
    }
    for a_digit in a.iter_mut().skip(b.len()) {
        if !borrow {
            break;
        }
        *a_digit = sub_with_borrow(*a_digit, 0, &mut borrow);
    }

    let tentative = if borrow {
        negate_complement(a);
        Sign::Negative
    } else {
        Sign::Positive
    };

    strip_significant_zeros(a);
    if a.is_empty() {
        a.push(0);
    }
    sign_from_digits(a, tentative)
}

/// Two's complement negation across every digit of the slice
fn negate_complement(digits: &mut [DigitType]) {
    for d in digits.iter_mut() {
        *d = !*d;
    }
    let mut carry = 1;
    add_carry_into_slice(digits, &mut carry);
}

/// Difference of digit slice and native unsigned value
pub fn subtract_integral(a: &[DigitType], b: AccumulatorType) -> (Sign, DigitVec) {
    let (b_digits, b_len) = split_integral(b);
    subtract(a, &b_digits[..b_len])
}

/// Difference of digit slice and floating point value
///
/// The float is truncated toward zero first. Subtracting a negative
/// value adds its magnitude. Non-finite values are an error.
///
pub fn subtract_floating<F: FloatingPoint>(a: &[DigitType], b: F) -> Result<(Sign, DigitVec), Error> {
    if b < F::zero() {
        let b_digits = digits_from_floating_point(-b)?;
        let sum = add(a, &b_digits);
        let sign = sign_from_digits(&sum, Sign::Positive);
        return Ok((sign, sum));
    }

    let b_digits = digits_from_floating_point(b)?;
    Ok(subtract(a, &b_digits))
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::DIGIT_MAX;

    macro_rules! impl_case {
        ($name:ident: [$($a:expr),*] - [$($b:expr),*] == $sign:ident [$($c:expr),*]) => {
            #[test]
            fn $name() {
                let a: &[DigitType] = &[$($a),*];
                let b: &[DigitType] = &[$($b),*];
                let (sign, diff) = subtract(a, b);
                assert_eq!(sign, Sign::$sign);
                assert_eq!(diff.as_slice(), &[$($c),*]);

                // anti-commutative
                let (rsign, rdiff) = subtract(b, a);
                assert_eq!(rsign, -Sign::$sign);
                assert_eq!(rdiff, diff);
            }
        };
    }

    impl_case!(case_0_0: [0] - [0] == Zero [0]);
    impl_case!(case_5_3: [5] - [3] == Positive [2]);
    impl_case!(case_3_5: [3] - [5] == Negative [2]);
    impl_case!(case_digit_max_7: [DIGIT_MAX] - [7] == Positive [DIGIT_MAX - 7]);
    impl_case!(case_0_digit_max: [0] - [DIGIT_MAX] == Negative [DIGIT_MAX]);
    impl_case!(case_digit_base_1: [0, 1] - [1] == Positive [DIGIT_MAX]);
    impl_case!(case_equal_long: [1, 2, 3] - [1, 2, 3] == Zero [0]);
    impl_case!(case_borrow_ripple: [0, 0, 0, 1] - [1] == Positive [DIGIT_MAX, DIGIT_MAX, DIGIT_MAX]);
    impl_case!(case_longer_subtrahend: [5] - [4, 0, 1] == Negative [DIGIT_MAX, DIGIT_MAX]);
    impl_case!(case_top_digits_cancel: [9, 7, 3] - [2, 7, 3] == Positive [7]);
    impl_case!(case_high_borrow: [1, 0, 2] - [2, 0, 1] == Positive [DIGIT_MAX, DIGIT_MAX]);
    impl_case!(case_unnormalized: [4, 0, 0] - [4] == Zero [0]);

    #[test]
    fn in_place_normalizes() {
        let mut a = vec![3, 0, 0];
        let sign = subtract_in_place(&mut a, &[3]);
        assert_eq!(sign, Sign::Zero);
        assert_eq!(a, vec![0]);

        let mut a = vec![0];
        let sign = subtract_in_place(&mut a, &[0, 0, 5]);
        assert_eq!(sign, Sign::Negative);
        assert_eq!(a, vec![0, 0, 5]);
    }

    #[test]
    fn identities() {
        let values: &[&[DigitType]] = &[
            &[0],
            &[1],
            &[DIGIT_MAX],
            &[0, 1],
            &[DIGIT_MAX, DIGIT_MAX, 17],
            &[12312739301371248917, 6692605942763486917],
        ];

        for &x in values {
            // x - x == 0
            assert_eq!(subtract(x, x), (Sign::Zero, DigitVec::zero()));

            // x - 0 == x
            let (sign, diff) = subtract(x, &[0]);
            assert_eq!(diff.as_slice(), x);
            assert_eq!(sign, sign_from_digits(x, Sign::Positive));

            // 0 - x == -x
            let (sign, diff) = subtract(&[0], x);
            assert_eq!(diff.as_slice(), x);
            assert_eq!(sign, sign_from_digits(x, Sign::Negative));

            for &y in values {
                // (x + y) - y == x
                let sum = add(x, y);
                let (_, diff) = subtract(&sum, y);
                assert_eq!(diff.as_slice(), x);
            }
        }
    }

    mod integral {
        use super::*;

        #[test]
        fn digit_max_minus_7() {
            let (sign, diff) = subtract_integral(&[DIGIT_MAX], 7);
            assert_eq!(sign, Sign::Positive);
            assert_eq!(diff.as_slice(), &[DIGIT_MAX - 7]);
        }

        #[test]
        fn zero_minus_digit_max() {
            let (sign, diff) = subtract_integral(&[0], DIGIT_MAX as u128);
            assert_eq!(sign, Sign::Negative);
            assert_eq!(diff.as_slice(), &[DIGIT_MAX]);
        }

        #[test]
        fn wide_scalar() {
            let (sign, diff) = subtract_integral(&[0, 0, 1], u128::MAX);
            assert_eq!(sign, Sign::Positive);
            assert_eq!(diff.as_slice(), &[1]);

            let (sign, diff) = subtract_integral(&[1], u128::MAX);
            assert_eq!(sign, Sign::Negative);
            assert_eq!(diff.as_slice(), &[DIGIT_MAX - 1, DIGIT_MAX]);
        }
    }

    mod floating {
        use super::*;

        #[test]
        fn truncates_toward_zero() {
            let (sign, diff) = subtract_floating(&[10], 3.9f64).unwrap();
            assert_eq!(sign, Sign::Positive);
            assert_eq!(diff.as_slice(), &[7]);

            let (sign, diff) = subtract_floating(&[3], 10.5f32).unwrap();
            assert_eq!(sign, Sign::Negative);
            assert_eq!(diff.as_slice(), &[7]);
        }

        #[test]
        fn negative_subtrahend_adds() {
            let (sign, diff) = subtract_floating(&[10], -3.9f64).unwrap();
            assert_eq!(sign, Sign::Positive);
            assert_eq!(diff.as_slice(), &[13]);

            let (sign, diff) = subtract_floating(&[0], -0.5f64).unwrap();
            assert_eq!(sign, Sign::Zero);
            assert_eq!(diff.as_slice(), &[0]);
        }

        #[test]
        fn two_pow_64() {
            let (sign, diff) = subtract_floating(&[0, 2], 18446744073709551616.0f64).unwrap();
            assert_eq!(sign, Sign::Positive);
            assert_eq!(diff.as_slice(), &[0, 1]);
        }

        #[test]
        fn non_finite_is_error() {
            assert!(subtract_floating(&[1], f64::NAN).is_err());
            assert!(subtract_floating(&[1], f64::INFINITY).is_err());
            assert!(subtract_floating(&[1], f32::NEG_INFINITY).is_err());
        }
    }
}
