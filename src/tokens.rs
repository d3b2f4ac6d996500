//! Token lookup tables
//!
//! Bases up to 36 use the case-insensitive alphanumeric alphabet
//! (`0-9`, then `a-z`). Bases above 36 use a case-sensitive 64 symbol
//! alphabet ordered `A-Z`, `a-z`, `0-9`, `+`, `/`; the value of each
//! symbol is fixed and visible in every formatted string.
//!

use crate::bigdigit::DigitType;

// DIGITS_PER_TOKEN, TOKENS_PER_DIGIT generated by build.rs
include!(concat!(env!("OUT_DIR"), "/radix_ratios.rs"));


/// Largest base handled by the case-insensitive tables
pub const MAX_CASE_INSENSITIVE_BASE: u32 = 36;

/// Sentinel for bytes which are not tokens in bases up to 36
pub const INVALID_BASE36_TOKEN: u8 = 255;

/// Sentinel for bytes which are not tokens in bases above 36
pub const INVALID_BASE64_TOKEN: i8 = -1;

/// Value to token, bases up to 36
pub static BASE36_TOKENS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Value to token, bases above 36
pub static BASE64_TOKENS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Token to value, bases up to 36 (unmapped bytes are `255`)
pub static BASE36_VALUES: [u8; 256] = build_base36_values();

/// Token to value, bases above 36 (unmapped bytes are `-1`)
pub static BASE64_VALUES: [i8; 256] = build_base64_values();


const fn build_base36_values() -> [u8; 256] {
    let mut table = [INVALID_BASE36_TOKEN; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

const fn build_base64_values() -> [i8; 256] {
    let mut table = [INVALID_BASE64_TOKEN; 256];
    let mut i = 0;
    while i < 26 {
        table[b'A' as usize + i] = i as i8;
        table[b'a' as usize + i] = 26 + i as i8;
        i += 1;
    }
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = 52 + i as i8;
        i += 1;
    }
    table[b'+' as usize] = 62;
    table[b'/' as usize] = 63;
    table
}


/// Value of token in given base
///
/// Bytes which are not tokens of the base's alphabet produce a value
/// greater than or equal to `base`; callers check against the base.
///
#[inline]
pub fn token_value(token: u8, base: u32) -> u32 {
    if base <= MAX_CASE_INSENSITIVE_BASE {
        u32::from(BASE36_VALUES[token as usize])
    } else {
        match BASE64_VALUES[token as usize] {
            v if v < 0 => u32::MAX,
            v => v as u32,
        }
    }
}

/// Token representing value in given base
///
/// `value` must be less than `base`
///
#[inline]
pub fn value_token(value: u8, base: u32) -> u8 {
    debug_assert!(u32::from(value) < base);
    if base <= MAX_CASE_INSENSITIVE_BASE {
        BASE36_TOKENS[value as usize]
    } else {
        BASE64_TOKENS[value as usize]
    }
}


/// Return `(base^k, k)` for the largest `k` such that `base^k` fits in a digit
///
/// `base` must be at least 2
///
pub(crate) fn chunk_power(base: u32) -> (DigitType, usize) {
    debug_assert!(base >= 2);

    let base = DigitType::from(base);
    let mut power = base;
    let mut count = 1;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        count += 1;
    }
    (power, count)
}
