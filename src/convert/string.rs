//! Digit vectors to and from token strings in bases 2 through 64
//!
//! The internal radix (2<sup>64</sup>) and the external base are not
//! related, so conversion in either direction treats the whole vector
//! as one number: parsing multiplies the accumulated vector by the base
//! and adds each new token, formatting repeatedly divides the vector by
//! the base and collects remainders.
//!
//! Both directions work on chunks of `k` tokens at a time, where
//! `base^k` is the largest power of the base fitting in one digit, so
//! each pass over the vector handles `k` tokens.
//!

use crate::stdlib::{String, Vec};

use num_integer::div_rem;
use num_traits::float::FloatCore;

use crate::arithmetic::division::div_rem_digit_in_place;
use crate::base::ensure_base_supported;
use crate::bigdigit::digitvec::trim_significant_zeros;
use crate::bigdigit::radix::carrying_mul_add;
use crate::bigdigit::{DigitType, DigitVec};
use crate::tokens::{chunk_power, token_value, value_token, DIGITS_PER_TOKEN, TOKENS_PER_DIGIT};
use crate::Error;


/// Parse tokens, most significant first, into a digit vector
///
/// Leading zero tokens are skipped. Any token outside the alphabet of
/// the base is an error naming the token and base.
///
pub fn digits_from_string(tokens: &[u8], base: u32) -> Result<DigitVec, Error> {
    ensure_base_supported(base)?;

    if tokens.is_empty() {
        return Err(Error::InvalidArgument(String::from("cannot parse empty token string")));
    }

    let first_significant = tokens.iter()
                                  .position(|&t| token_value(t, base) != 0)
                                  .unwrap_or(tokens.len());
    let significant = &tokens[first_significant..];
    if significant.is_empty() {
        return Ok(DigitVec::zero());
    }

    let estimate = DIGITS_PER_TOKEN[base as usize] * significant.len() as f64;
    let mut digits = Vec::with_capacity(FloatCore::ceil(estimate) as usize + 1);

    let (chunk_base, chunk_len) = chunk_power(base);
    let radix = DigitType::from(base);

    for chunk in significant.chunks(chunk_len) {
        let mut value: DigitType = 0;
        for &token in chunk {
            let token_val = token_value(token, base);
            if token_val >= base {
                return Err(invalid_token(token, base));
            }
            value = value * radix + DigitType::from(token_val);
        }

        let multiplier = if chunk.len() == chunk_len {
            chunk_base
        } else {
            radix.pow(chunk.len() as u32)
        };
        multiply_accumulate(&mut digits, multiplier, value);
    }

    Ok(DigitVec::from_vec(digits))
}

/// Perform digits = digits * multiplier + addend
fn multiply_accumulate(digits: &mut Vec<DigitType>, multiplier: DigitType, addend: DigitType) {
    let mut carry = addend;
    for d in digits.iter_mut() {
        let (hi, lo) = carrying_mul_add(*d, multiplier, carry, 0);
        *d = lo;
        carry = hi;
    }
    if carry != 0 {
        digits.push(carry);
    }
}

fn invalid_token(token: u8, base: u32) -> Error {
    Error::InvalidArgument(format!(
        "invalid token {:?} for base {}", char::from(token), base
    ))
}


/// Token values of digits in base, most significant first
///
/// Zero produces the single value `0`.
///
pub fn token_values_from_digits(digits: &[DigitType], base: u32) -> Result<Vec<u8>, Error> {
    ensure_base_supported(base)?;

    let digits = trim_significant_zeros(digits);
    if digits.is_empty() {
        return Ok(vec![0]);
    }

    let estimate = TOKENS_PER_DIGIT[base as usize] * digits.len() as f64;
    let mut values = Vec::with_capacity(FloatCore::floor(estimate) as usize + 1);

    let (chunk_base, chunk_len) = chunk_power(base);
    let radix = DigitType::from(base);

    // least significant value first, reversed at the end
    let mut quotient = digits.to_vec();
    while quotient.len() > 1 {
        let mut remainder = div_rem_digit_in_place(&mut quotient, chunk_base);
        for _ in 0..chunk_len {
            let (q, r) = div_rem(remainder, radix);
            values.push(r as u8);
            remainder = q;
        }
    }

    let mut remainder = quotient[0];
    while remainder != 0 {
        let (q, r) = div_rem(remainder, radix);
        values.push(r as u8);
        remainder = q;
    }

    values.reverse();
    Ok(values)
}

/// Format digits as tokens in base
///
/// Only the magnitude is written; callers add any sign.
///
pub fn string_from_digits(digits: &[DigitType], base: u32) -> Result<String, Error> {
    let values = token_values_from_digits(digits, base)?;
    Ok(values.into_iter().map(|v| char::from(value_token(v, base))).collect())
}
