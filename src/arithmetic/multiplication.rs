//! Schoolbook multiplication of digit vectors

use crate::stdlib::Vec;

use crate::bigdigit::digitvec::trim_significant_zeros;
use crate::bigdigit::radix::{add_carry_into_slice, carrying_mul_add_inplace};
use crate::bigdigit::{AccumulatorType, DigitType, DigitVec};
use crate::convert::integral::split_integral;


/// Product of two digit slices
pub fn multiply(a: &[DigitType], b: &[DigitType]) -> DigitVec {
    let a = trim_significant_zeros(a);
    let b = trim_significant_zeros(b);
    if a.is_empty() || b.is_empty() {
        return DigitVec::zero();
    }

    let mut result = Vec::with_capacity(a.len() + b.len());
    multiply_digit_slices_into(a, b, &mut result);
    DigitVec::from_vec(result)
}

/// Product of digit slice and native unsigned value
pub fn multiply_integral(a: &[DigitType], b: AccumulatorType) -> DigitVec {
    let (b_digits, b_len) = split_integral(b);
    multiply(a, &b_digits[..b_len])
}

/// Fill vector with product of digits
///
/// Result is `a.len() + b.len()` digits long and not trimmed.
///
pub(crate) fn multiply_digit_slices_into(a: &[DigitType], b: &[DigitType], result: &mut Vec<DigitType>) {
    result.clear();
    result.resize(a.len() + b.len(), 0);

    for (ia, &digit_a) in a.iter().enumerate() {
        if digit_a == 0 {
            continue;
        }

        let mut carry = 0;
        for (&digit_b, r) in b.iter().zip(result[ia..].iter_mut()) {
            carrying_mul_add_inplace(digit_a, digit_b, r, &mut carry);
        }
        add_carry_into_slice(&mut result[ia + b.len()..], &mut carry);
        debug_assert_eq!(carry, 0);
    }
}
