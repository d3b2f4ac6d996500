//! Primitive operations on single digits in the 2<sup>64</sup> radix
//!
//! Every multi-digit routine in the crate is built from these; they
//! widen into the accumulator type and split the result back into a
//! (high, low) pair of digits.
//!

use super::{AccumulatorType, DigitType, DIGIT_BITS};

use num_traits::Zero;


/// Split accumulator into (high, low) digits
#[inline]
pub(crate) fn split_wide_digit(n: AccumulatorType) -> (DigitType, DigitType) {
    ((n >> DIGIT_BITS) as DigitType, n as DigitType)
}

/// Join (high, low) digits into one accumulator value
#[inline]
pub(crate) fn join_wide_digit(hi: DigitType, lo: DigitType) -> AccumulatorType {
    (AccumulatorType::from(hi) << DIGIT_BITS) | AccumulatorType::from(lo)
}

/// Return (overflow, sum) of two digits
#[inline]
pub(crate) fn expanding_add(a: DigitType, b: DigitType) -> (DigitType, DigitType) {
    let (sum, overflow) = a.overflowing_add(b);
    (DigitType::from(overflow), sum)
}

/// Return (high, low) of `a * b + c + d`
#[inline]
pub(crate) fn carrying_mul_add(a: DigitType, b: DigitType, c: DigitType, d: DigitType) -> (DigitType, DigitType) {
    let a = AccumulatorType::from(a);
    let b = AccumulatorType::from(b);
    let c = AccumulatorType::from(c);
    let d = AccumulatorType::from(d);
    split_wide_digit(a * b + c + d)
}

/// Perform c += a * b + carry, returning overflow in carry
#[inline]
pub(crate) fn carrying_mul_add_inplace(a: DigitType, b: DigitType, c: &mut DigitType, carry: &mut DigitType) {
    let (hi, lo) = carrying_mul_add(a, b, *c, *carry);
    *c = lo;
    *carry = hi;
}

/// Return n + carry, storing overflow back in carry
#[inline]
pub(crate) fn add_carry(n: DigitType, carry: &mut DigitType) -> DigitType {
    let (hi, lo) = expanding_add(n, *carry);
    *carry = hi;
    lo
}

/// Perform n += carry, returning overflow in carry
#[inline]
pub(crate) fn addassign_carry(n: &mut DigitType, carry: &mut DigitType) {
    *n = add_carry(*n, carry);
}

/// Return a + b + carry, storing overflow (0 or 1) back in carry
#[inline]
pub(crate) fn add_with_carry(a: DigitType, b: DigitType, carry: &mut DigitType) -> DigitType {
    let (sum, o1) = a.overflowing_add(b);
    let (sum, o2) = sum.overflowing_add(*carry);
    *carry = DigitType::from(o1 | o2);
    sum
}

/// Return a - b - borrow, storing the new borrow in borrow
#[inline]
pub(crate) fn sub_with_borrow(a: DigitType, b: DigitType, borrow: &mut bool) -> DigitType {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(DigitType::from(*borrow));
    *borrow = b1 | b2;
    diff
}

/// Add carry into slice, starting at least significant digit
///
/// Any remaining overflow is left in carry
///
pub(crate) fn add_carry_into_slice(dest: &mut [DigitType], c: &mut DigitType) {
    for d in dest.iter_mut() {
        if c.is_zero() {
            return;
        }
        addassign_carry(d, c);
    }
}
