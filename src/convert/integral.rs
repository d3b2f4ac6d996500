//! Digit vectors to and from native unsigned integers

use crate::bigdigit::radix::{join_wide_digit, split_wide_digit};
use crate::bigdigit::{AccumulatorType, DigitType, DigitVec, DIGIT_MAX};


/// Split native value into (digits, count) without allocating
///
/// Used by the scalar forms of the arithmetic kernel.
#[inline]
pub(crate) fn split_integral(value: AccumulatorType) -> ([DigitType; 2], usize) {
    let (hi, lo) = split_wide_digit(value);
    if hi == 0 {
        ([lo, 0], 1)
    } else {
        ([lo, hi], 2)
    }
}

/// Digit vector of native unsigned value
///
/// Always one or two digits.
pub fn digits_from_integral(value: AccumulatorType) -> DigitVec {
    if value <= AccumulatorType::from(DIGIT_MAX) {
        DigitVec::from_vec(vec![value as DigitType])
    } else {
        let (hi, lo) = split_wide_digit(value);
        DigitVec::from_vec(vec![lo, hi])
    }
}

/// Native unsigned value of digits
///
/// Only the two least significant digits are read; anything above is
/// dropped, wrapping like native unsigned arithmetic.
///
pub fn integral_from_digits(digits: &[DigitType]) -> AccumulatorType {
    match digits {
        [] => 0,
        [lo] => AccumulatorType::from(*lo),
        [lo, hi, ..] => join_wide_digit(*hi, *lo),
    }
}
