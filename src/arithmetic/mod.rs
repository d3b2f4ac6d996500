//! Arithmetic kernel on digit vectors
//!
//! Each operation comes in a `digits op digits` form and a
//! `digits op integral` form where the scalar is split into an on-stack
//! pair of digits. Results are always normalized
//! [`DigitVec`](crate::bigdigit::DigitVec)s; inputs
//! may carry significant zeros.
//!

use crate::stdlib::cmp::Ordering;

use crate::bigdigit::digitvec::{compare_digit_slices, trim_significant_zeros};
use crate::bigdigit::DigitType;
use crate::sign::Sign;

pub mod addition;
pub mod subtraction;
pub mod multiplication;
pub mod division;

pub use self::addition::{add, add_integral};
pub use self::subtraction::{subtract, subtract_floating, subtract_in_place, subtract_integral};
pub use self::multiplication::{multiply, multiply_integral};
pub use self::division::{
    divide, divide_and_conquer_divide, divide_signed, long_divide, long_divide_integral,
    DIVIDE_AND_CONQUER_BASE_CASE,
};



/// Resolve tentative sign against the magnitude it applies to
///
/// Zero magnitudes always have sign [`Sign::Zero`].
///
#[inline]
pub fn sign_from_digits(digits: &[DigitType], tentative: Sign) -> Sign {
    if trim_significant_zeros(digits).is_empty() {
        Sign::Zero
    } else {
        tentative
    }
}

/// Compare magnitudes of two digit slices
#[inline]
pub fn compare(a: &[DigitType], b: &[DigitType]) -> Ordering {
    compare_digit_slices(a, b)
}

/// Return (longer, shorter) of two slices
///
/// Slices of equal length are returned in the given order.
///
#[inline]
pub(crate) fn order_by_len<'a>(
    a: &'a [DigitType], b: &'a [DigitType]
) -> (&'a [DigitType], &'a [DigitType]) {
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::bigdigit::DIGIT_MAX;

    mod sign_from_digits {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: [$($digits:expr),*], $tentative:ident => $expected:ident) => {
                #[test]
                fn $name() {
                    assert_eq!(sign_from_digits(&[$($digits),*], Sign::$tentative), Sign::$expected);
                }
            };
        }

        impl_case!(case_zero_positive: [0], Positive => Zero);
        impl_case!(case_zero_negative: [0], Negative => Zero);
        impl_case!(case_unnormalized_zero: [0, 0, 0], Negative => Zero);
        impl_case!(case_one_positive: [1], Positive => Positive);
        impl_case!(case_one_negative: [1], Negative => Negative);
        impl_case!(case_high_digit: [0, 0, 1], Negative => Negative);
    }

    #[test]
    fn compare_ignores_significant_zeros() {
        assert_eq!(compare(&[1, 2, 0], &[1, 2]), Ordering::Equal);
        assert_eq!(compare(&[DIGIT_MAX], &[0, 1]), Ordering::Less);
        assert_eq!(compare(&[0, 2], &[DIGIT_MAX, 1]), Ordering::Greater);
        assert_eq!(compare(&[0], &[0, 0]), Ordering::Equal);
    }

    #[test]
    fn order_by_len_returns_longer_first() {
        let a = [1, 2, 3];
        let b = [4];
        assert_eq!(order_by_len(&a, &b), (&a[..], &b[..]));
        assert_eq!(order_by_len(&b, &a), (&a[..], &b[..]));

        let c = [5, 6, 7];
        assert_eq!(order_by_len(&c, &a), (&c[..], &a[..]));
    }
}
