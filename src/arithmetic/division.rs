//! Division of digit vectors
//!
//! Two algorithms produce the same (quotient, remainder) pair:
//!
//! * [`long_divide`]: Knuth's algorithm D, quadratic in the operand
//!   lengths. Each quotient digit is estimated from the top two digits
//!   of the running remainder and the top digit of the normalized
//!   divisor, refined with the next digit, and corrected by a single
//!   add-back if the estimate was still one too large.
//!
//! * [`divide_and_conquer_divide`]: Burnikel-Ziegler recursive division,
//!   splitting a `2n / n` digit division into two `3n/2 / n` divisions,
//!   each of which is one `n / n/2` division plus a multiplication. Falls
//!   back to long division once the quotient is at most
//!   [`DIVIDE_AND_CONQUER_BASE_CASE`] digits.
//!
//! [`divide`] chooses between them using the threshold in [`Context`].
//!

use crate::stdlib::cmp::Ordering;
use crate::stdlib::Vec;

use crate::bigdigit::digitvec::{strip_significant_zeros, trim_significant_zeros};
use crate::bigdigit::radix::{
    add_with_carry, carrying_mul_add, join_wide_digit, sub_with_borrow,
};
use crate::bigdigit::{AccumulatorType, DigitType, DigitVec, DIGIT_BASE, DIGIT_BITS, DIGIT_MAX};
use crate::context::Context;
use crate::convert::integral::split_integral;
use crate::sign::Sign;
use crate::Error;

use super::addition::add;
use super::multiplication::multiply;
use super::subtraction::subtract;
use super::{compare, sign_from_digits};


/// Quotients of at most this many digits are computed by long division
/// inside the divide-and-conquer recursion
pub const DIVIDE_AND_CONQUER_BASE_CASE: usize = 16;


/// Divide digits in place by a single digit, returning the remainder
///
/// The quotient is left in `digits` without significant zeros (at
/// least one digit remains). `divisor` must be nonzero.
///
pub(crate) fn div_rem_digit_in_place(digits: &mut Vec<DigitType>, divisor: DigitType) -> DigitType {
    debug_assert!(divisor != 0);

    let divisor = AccumulatorType::from(divisor);
    let mut remainder: DigitType = 0;
    for d in digits.iter_mut().rev() {
        let n = join_wide_digit(remainder, *d);
        *d = (n / divisor) as DigitType;
        remainder = (n % divisor) as DigitType;
    }

    strip_significant_zeros(digits);
    if digits.is_empty() {
        digits.push(0);
    }
    remainder
}


/// Quotient and remainder of two digit slices by long division
pub fn long_divide(a: &[DigitType], b: &[DigitType]) -> Result<(DigitVec, DigitVec), Error> {
    let b = trim_significant_zeros(b);
    if b.is_empty() {
        return Err(Error::DivisionByZero);
    }
    Ok(long_div_rem(a, b))
}

/// Quotient and remainder of digit slice and native unsigned value
pub fn long_divide_integral(a: &[DigitType], b: AccumulatorType) -> Result<(DigitVec, DigitVec), Error> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    let (b_digits, b_len) = split_integral(b);
    Ok(long_div_rem(a, &b_digits[..b_len]))
}

/// Long division, `b` is nonzero
fn long_div_rem(a: &[DigitType], b: &[DigitType]) -> (DigitVec, DigitVec) {
    let a = trim_significant_zeros(a);
    let b = trim_significant_zeros(b);
    debug_assert!(!b.is_empty());

    if compare(a, b) == Ordering::Less {
        return (DigitVec::zero(), DigitVec::from_slice(a));
    }

    if b.len() == 1 {
        let mut quotient = a.to_vec();
        let remainder = div_rem_digit_in_place(&mut quotient, b[0]);
        return (DigitVec::from_vec(quotient), DigitVec::from_vec(vec![remainder]));
    }

    let (quotient, remainder) = knuth_div_rem(a, b);
    (DigitVec::from_vec(quotient), DigitVec::from_vec(remainder))
}

/// Knuth algorithm D
///
/// Requires `a.len() >= b.len() >= 2` and a nonzero top digit of `b`.
///
fn knuth_div_rem(a: &[DigitType], b: &[DigitType]) -> (Vec<DigitType>, Vec<DigitType>) {
    let n = b.len();
    debug_assert!(n >= 2);
    debug_assert!(a.len() >= n);

    // normalize so the top bit of the divisor is set
    let shift = b[n - 1].leading_zeros();
    let v = shift_left_bits(b, shift);
    debug_assert_eq!(v.len(), n);

    let mut u = shift_left_bits(a, shift);
    if u.len() == a.len() {
        u.push(0);
    }

    let m = a.len() - n;
    let v_top = AccumulatorType::from(v[n - 1]);
    let v_next = AccumulatorType::from(v[n - 2]);
    let mut quotient = vec![0; m + 1];

    for j in (0..=m).rev() {
        let numerator = join_wide_digit(u[j + n], u[j + n - 1]);
        let mut qhat = numerator / v_top;
        let mut rhat = numerator % v_top;

        // qhat < DIGIT_BASE is checked first so the product cannot overflow
        while qhat >= DIGIT_BASE
            || qhat * v_next > join_wide_digit(rhat as DigitType, u[j + n - 2]) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= DIGIT_BASE {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut qhat = qhat as DigitType;
        let mut carry = 0;
        let mut borrow = false;
        for i in 0..n {
            let (hi, lo) = carrying_mul_add(qhat, v[i], carry, 0);
            carry = hi;
            u[j + i] = sub_with_borrow(u[j + i], lo, &mut borrow);
        }
        u[j + n] = sub_with_borrow(u[j + n], carry, &mut borrow);

        // estimate was one too large: add divisor back
        if borrow {
            qhat -= 1;
            let mut carry = 0;
            for i in 0..n {
                u[j + i] = add_with_carry(u[j + i], v[i], &mut carry);
            }
            u[j + n] = u[j + n].wrapping_add(carry);
        }

        quotient[j] = qhat;
    }

    u.truncate(n);
    shift_right_bits_in_place(&mut u, shift);
    (quotient, u)
}

/// Return digits shifted up by `shift` bits, extended by the overflow
/// digit if it is nonzero
fn shift_left_bits(digits: &[DigitType], shift: u32) -> Vec<DigitType> {
    let mut result = Vec::with_capacity(digits.len() + 1);
    if shift == 0 {
        result.extend_from_slice(digits);
        return result;
    }

    let mut carry = 0;
    for &d in digits {
        result.push((d << shift) | carry);
        carry = d >> (DIGIT_BITS - shift);
    }
    if carry != 0 {
        result.push(carry);
    }
    result
}

/// Shift digits down by `shift` bits, discarding the low bits
fn shift_right_bits_in_place(digits: &mut [DigitType], shift: u32) {
    if shift == 0 {
        return;
    }

    let mut carry = 0;
    for d in digits.iter_mut().rev() {
        let next_carry = *d << (DIGIT_BITS - shift);
        *d = (*d >> shift) | carry;
        carry = next_carry;
    }
}


/// Quotient and remainder of two digit slices by recursive division
///
/// Results are identical to [`long_divide`].
///
pub fn divide_and_conquer_divide(a: &[DigitType], b: &[DigitType]) -> Result<(DigitVec, DigitVec), Error> {
    let a = trim_significant_zeros(a);
    let b = trim_significant_zeros(b);
    if b.is_empty() {
        return Err(Error::DivisionByZero);
    }
    if compare(a, b) == Ordering::Less {
        return Ok((DigitVec::zero(), DigitVec::from_slice(a)));
    }

    // the recursive estimates need the top bit of the divisor set
    let shift = b[b.len() - 1].leading_zeros();
    let b = DigitVec::from_vec(shift_left_bits(b, shift));
    let a = shift_left_bits(a, shift);
    let n = b.len();

    // divide n-digit chunks of the dividend from the top, carrying the
    // remainder into the next chunk
    let mut quotient_chunks = Vec::with_capacity(a.len() / n + 1);
    let mut remainder = DigitVec::zero();
    for chunk in a.chunks(n).rev() {
        let dividend = join_blocks(&remainder, chunk, n);
        let (q, r) = div_2n_1n(&dividend, &b, n);
        quotient_chunks.push(q);
        remainder = r;
    }

    let mut quotient = Vec::with_capacity(quotient_chunks.len() * n);
    for q in quotient_chunks.iter().rev() {
        let start = quotient.len();
        quotient.extend_from_slice(q);
        quotient.resize(start + n, 0);
    }

    let mut remainder = remainder.into_vec();
    shift_right_bits_in_place(&mut remainder, shift);

    Ok((DigitVec::from_vec(quotient), DigitVec::from_vec(remainder)))
}

/// Divide `a < b * B^n` by the n-digit `b`
fn div_2n_1n(a: &DigitVec, b: &DigitVec, n: usize) -> (DigitVec, DigitVec) {
    if a.len().saturating_sub(n) <= DIVIDE_AND_CONQUER_BASE_CASE {
        return long_div_rem(a, b);
    }

    // odd sizes are padded by one digit on both operands
    if n % 2 == 1 {
        let a = shift_left_digits(a, 1);
        let b = shift_left_digits(b, 1);
        let (q, r) = div_2n_1n(&a, &b, n + 1);
        return (q, digit_range(&r, 1, r.len()));
    }

    let half = n / 2;
    let b1 = digit_range(b, half, b.len());
    let b2 = digit_range(b, 0, half);

    let (q1, r) = div_3n_2n(
        digit_range(a, n, a.len()), &digit_range(a, half, n), b, &b1, &b2, half
    );
    let (q2, r) = div_3n_2n(r, &digit_range(a, 0, half), b, &b1, &b2, half);

    (join_blocks(&q1, &q2, half), r)
}

/// Divide `a12 * B^n + a3` by `b = b1 * B^n + b2`
fn div_3n_2n(
    a12: DigitVec,
    a3: &DigitVec,
    b: &DigitVec,
    b1: &DigitVec,
    b2: &DigitVec,
    n: usize,
) -> (DigitVec, DigitVec) {
    let (mut q, r) = if digit_range(&a12, n, a12.len()) == *b1 {
        // quotient estimate would overflow n digits
        let q = DigitVec::from_vec(vec![DIGIT_MAX; n]);
        let (_, r) = subtract(&a12, &shift_left_digits(b1, n));
        (q, add(&r, b1))
    } else {
        div_2n_1n(&a12, b1, n)
    };

    let (mut sign, mut r) = subtract(&join_blocks(&r, a3, n), &multiply(&q, b2));
    while sign == Sign::Negative {
        q = subtract(&q, &[1]).1;
        let (s, m) = subtract(b, &r);
        sign = s;
        r = m;
    }

    (q, r)
}

/// Return `hi * B^n + lo`, where `lo` has at most n digits
fn join_blocks(hi: &[DigitType], lo: &[DigitType], n: usize) -> DigitVec {
    let lo = trim_significant_zeros(lo);
    debug_assert!(lo.len() <= n);

    let mut digits = Vec::with_capacity(n + hi.len());
    digits.extend_from_slice(lo);
    digits.resize(n, 0);
    digits.extend_from_slice(hi);
    DigitVec::from_vec(digits)
}

/// Return `digits * B^n`
fn shift_left_digits(digits: &DigitVec, n: usize) -> DigitVec {
    if digits.is_zero() {
        return DigitVec::zero();
    }
    let mut shifted = vec![0; n];
    shifted.extend_from_slice(digits);
    DigitVec::from_vec(shifted)
}

/// Value of the digits in positions `[lo, hi)`
fn digit_range(digits: &[DigitType], lo: usize, hi: usize) -> DigitVec {
    let hi = hi.min(digits.len());
    let lo = lo.min(hi);
    DigitVec::from_slice(&digits[lo..hi])
}


/// Quotient and remainder magnitudes of two digit slices
///
/// Uses divide-and-conquer division when the divisor has at least
/// `context.division_threshold()` digits and the dividend is longer than
/// the divisor, otherwise long division.
///
pub fn divide(a: &[DigitType], b: &[DigitType], context: &Context) -> Result<(DigitVec, DigitVec), Error> {
    let a = trim_significant_zeros(a);
    let b = trim_significant_zeros(b);
    if b.is_empty() {
        return Err(Error::DivisionByZero);
    }

    if b.len() >= context.division_threshold() && a.len() > b.len() {
        log::trace!("divide-and-conquer division: {} / {} digits", a.len(), b.len());
        divide_and_conquer_divide(a, b)
    } else {
        log::trace!("long division: {} / {} digits", a.len(), b.len());
        long_divide(a, b)
    }
}

/// Signed quotient and remainder, truncating toward zero
///
/// The quotient sign is the product of the operand signs, the
/// remainder takes the sign of the dividend; either is
/// [`Sign::Zero`] when its magnitude is zero.
///
pub fn divide_signed(
    sign_a: Sign,
    a: &[DigitType],
    sign_b: Sign,
    b: &[DigitType],
    context: &Context,
) -> Result<((Sign, DigitVec), (Sign, DigitVec)), Error> {
    let (quotient, remainder) = divide(a, b, context)?;
    let quotient_sign = sign_from_digits(&quotient, sign_a * sign_b);
    let remainder_sign = sign_from_digits(&remainder, sign_a);
    Ok(((quotient_sign, quotient), (remainder_sign, remainder)))
}
