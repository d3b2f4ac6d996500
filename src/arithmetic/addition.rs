//! Addition of digit vectors

use crate::stdlib::Vec;

use crate::bigdigit::radix::{add_carry, add_with_carry};
use crate::bigdigit::{AccumulatorType, DigitType, DigitVec};
use crate::convert::integral::split_integral;

use super::order_by_len;


/// Sum of two digit slices
pub fn add(a: &[DigitType], b: &[DigitType]) -> DigitVec {
    let (a, b) = order_by_len(a, b);
    let mut result = Vec::with_capacity(a.len() + 1);
    extend_digit_slice_sum_into(a, b, &mut result);
    DigitVec::from_vec(result)
}

/// Sum of digit slice and native unsigned value
pub fn add_integral(a: &[DigitType], b: AccumulatorType) -> DigitVec {
    let (b_digits, b_len) = split_integral(b);
    add(a, &b_digits[..b_len])
}

/// Extend vector with sum of digits, `a` is the longer slice
#[inline]
pub(crate) fn extend_digit_slice_sum_into(a: &[DigitType], b: &[DigitType], v: &mut Vec<DigitType>) {
    debug_assert!(a.len() >= b.len());

    let mut a_digits = a.iter();
    let mut carry = 0;
    // b first so zip does not consume an extra digit of a
    for (&b_digit, &a_digit) in b.iter().zip(a_digits.by_ref()) {
        v.push(add_with_carry(a_digit, b_digit, &mut carry));
    }

    while carry != 0 {
        match a_digits.next() {
            Some(&digit) => {
                v.push(add_carry(digit, &mut carry));
            }
            None => {
                // digits exhausted with carry remaining
                v.push(carry);
                return;
            }
        }
    }

    v.extend(a_digits);
}
