// Copyright 2026 The tastyint developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary precision integers
//!
//! `Integer` stores any integer, limited only by memory, as a sign and
//! a little-endian vector of 64-bit digits. All arithmetic is done on
//! these digit vectors by the kernel in [`arithmetic`]; conversions to
//! and from native integers, floating point values, and strings of
//! tokens in bases 2 through 64 live in [`convert`].
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers.
//!
//! # Example
//!
//! ```
//! use tastyint::Integer;
//! use std::str::FromStr;
//!
//! let a = Integer::from_str("123456789012345678901234567890").unwrap();
//! let b = Integer::from(987654321u32);
//!
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "121932631124828532112482853211126352690");
//! assert_eq!(&product / &b, a);
//!
//! // bases above 36 use a case-sensitive alphabet
//! assert_eq!(b.to_str_radix(64).unwrap(), "63mix");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::needless_range_loop)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "num-bigint")]
pub extern crate num_bigint;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::string::String;

pub use num_traits::{FromPrimitive, Num, One, ToPrimitive, Zero};

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

pub mod bigdigit;
pub mod sign;
pub mod base;
pub mod tokens;
pub mod convert;
pub mod arithmetic;

// Mathematical context
mod context;
pub use context::Context;

// From<T>, To<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialOrd, Ord
mod impl_cmp;

// Display, Binary, Octal, LowerHex, UpperHex
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

pub use bigdigit::{DigitType, DigitVec};
pub use sign::Sign;
pub use convert::floating::FloatingPoint;

use base::{base_prefix_from_string, ensure_base_supported, MAX_SIGNED_BASE};
use convert::{digits_from_integral, digits_from_string, integral_from_digits, string_from_digits};


/// Errors reported by parsing, conversion and division
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported base, empty or malformed token string, or a float
    /// which is not finite
    InvalidArgument(String),
    /// Divisor was zero
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            InvalidArgument(ref reason) => reason[..].fmt(f),
            DivisionByZero => "Division by zero".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}


/// An arbitrary precision integer
///
/// The sign is [`Sign::Zero`] exactly when the digits are `[0]`.
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    sign: Sign,
    digits: DigitVec,
}

impl Integer {
    /// Creates and initializes an `Integer`
    ///
    /// The sign is made consistent with the digits: zero digits always
    /// produce [`Sign::Zero`], and nonzero digits with [`Sign::Zero`]
    /// are positive.
    ///
    #[inline]
    pub fn new(sign: Sign, digits: DigitVec) -> Integer {
        let sign = match sign {
            _ if digits.is_zero() => Sign::Zero,
            Sign::Zero => Sign::Positive,
            sign => sign,
        };
        Integer { sign, digits }
    }

    /// Build from kernel result, sign already resolved
    #[inline]
    pub(crate) fn from_parts(sign: Sign, digits: DigitVec) -> Integer {
        debug_assert_eq!(sign.is_zero(), digits.is_zero());
        Integer { sign, digits }
    }

    /// Build from sign and native unsigned magnitude
    pub(crate) fn from_sign_magnitude(sign: Sign, magnitude: u128) -> Integer {
        Integer::new(sign, digits_from_integral(magnitude))
    }

    /// Parse string in given base
    ///
    /// A base of `0` detects the base from a `0b`, `0x`, or `0` prefix,
    /// defaulting to decimal. A leading `+` or `-` is accepted when the
    /// base is at most 62; in bases 63 and 64 `+` is a token.
    ///
    /// ```
    /// use tastyint::Integer;
    ///
    /// assert_eq!(Integer::from_str_radix("-0x1f", 0).unwrap(), Integer::from(-31));
    /// assert_eq!(Integer::from_str_radix("017", 0).unwrap(), Integer::from(15));
    /// assert_eq!(Integer::from_str_radix("zz", 36).unwrap(), Integer::from(1295));
    /// assert!(Integer::from_str_radix("12?", 10).is_err());
    /// ```
    pub fn from_str_radix(s: &str, base: u32) -> Result<Integer, Error> {
        if base != 0 {
            ensure_base_supported(base)?;
        }

        let bytes = s.as_bytes();
        let (negative, unsigned) = match bytes {
            [b'-', rest @ ..] if base <= MAX_SIGNED_BASE => (true, rest),
            [b'+', rest @ ..] if base <= MAX_SIGNED_BASE => (false, rest),
            _ => (false, bytes),
        };

        let (base, tokens) = if base == 0 {
            let prefix = base_prefix_from_string(unsigned);
            (prefix.base, &unsigned[prefix.prefix_length..])
        } else {
            (base, unsigned)
        };

        let digits = digits_from_string(tokens, base)?;
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Ok(Integer::new(sign, digits))
    }

    /// Creates and initializes an `Integer` from bytes
    ///
    /// Decodes using `str::from_utf8` and forwards to
    /// `Integer::from_str_radix`.
    ///
    #[inline]
    pub fn parse_bytes(buf: &[u8], base: u32) -> Option<Integer> {
        stdlib::str::from_utf8(buf)
                    .ok()
                    .and_then(|s| Integer::from_str_radix(s, base).ok())
    }

    /// Format in given base, with a leading `-` if negative
    ///
    /// Bases up to 36 are written in lowercase.
    ///
    pub fn to_str_radix(&self, base: u32) -> Result<String, Error> {
        let magnitude = string_from_digits(&self.digits, base)?;
        if self.sign.is_negative() {
            let mut s = String::with_capacity(magnitude.len() + 1);
            s.push('-');
            s.push_str(&magnitude);
            Ok(s)
        } else {
            Ok(magnitude)
        }
    }

    /// Sign of the value
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Digits of the absolute value
    #[inline]
    pub fn digits(&self) -> &DigitVec {
        &self.digits
    }

    /// Little-endian digits of the absolute value as a slice
    #[inline]
    pub fn magnitude(&self) -> &[DigitType] {
        self.digits.as_slice()
    }

    /// Decompose into sign and digits
    #[inline]
    pub fn into_parts(self) -> (Sign, DigitVec) {
        (self.sign, self.digits)
    }

    /// True if value is less than zero
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// True if value is greater than zero
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign.is_positive()
    }

    /// Absolute value
    #[inline]
    pub fn abs(&self) -> Integer {
        Integer::from_parts(self.sign * self.sign, self.digits.clone())
    }

    /// Value modulo 2<sup>128</sup>, like `as u128` on a wider type
    pub fn to_u128_wrapping(&self) -> u128 {
        let magnitude = integral_from_digits(&self.digits);
        if self.sign.is_negative() {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Value modulo 2<sup>128</sup> reinterpreted as two's complement
    pub fn to_i128_wrapping(&self) -> i128 {
        self.to_u128_wrapping() as i128
    }

    /// Quotient and remainder, truncating toward zero
    ///
    /// The remainder has the sign of `self`.
    ///
    /// ```
    /// use tastyint::{Error, Integer};
    ///
    /// let (q, r) = Integer::from(-7).div_rem(&Integer::from(2)).unwrap();
    /// assert_eq!((q, r), (Integer::from(-3), Integer::from(-1)));
    ///
    /// assert_eq!(Integer::from(1).div_rem(&Integer::from(0)), Err(Error::DivisionByZero));
    /// ```
    pub fn div_rem(&self, other: &Integer) -> Result<(Integer, Integer), Error> {
        self.div_rem_with_context(other, &Context::default())
    }

    /// Quotient and remainder using the algorithm choice of `context`
    pub fn div_rem_with_context(&self, other: &Integer, context: &Context) -> Result<(Integer, Integer), Error> {
        let ((q_sign, q), (r_sign, r)) = arithmetic::divide_signed(
            self.sign, &self.digits, other.sign, &other.digits, context
        )?;
        Ok((Integer::from_parts(q_sign, q), Integer::from_parts(r_sign, r)))
    }

    /// Quotient, or `None` if `other` is zero
    pub fn checked_div(&self, other: &Integer) -> Option<Integer> {
        self.div_rem(other).ok().map(|(q, _)| q)
    }

    /// Remainder, or `None` if `other` is zero
    pub fn checked_rem(&self, other: &Integer) -> Option<Integer> {
        self.div_rem(other).ok().map(|(_, r)| r)
    }

    /// Subtract floating point value, truncated toward zero
    ///
    /// ```
    /// use tastyint::Integer;
    ///
    /// assert_eq!(Integer::from(10).sub_float(2.9f64).unwrap(), Integer::from(8));
    /// assert_eq!(Integer::from(-10).sub_float(-2.9f32).unwrap(), Integer::from(-8));
    /// assert!(Integer::from(10).sub_float(f64::NAN).is_err());
    /// ```
    pub fn sub_float<F: FloatingPoint>(&self, value: F) -> Result<Integer, Error> {
        // -|a| - v == -(|a| - (-v))
        let (value, outer_sign) = if self.sign.is_negative() {
            (-value, Sign::Negative)
        } else {
            (value, Sign::Positive)
        };
        let (sign, digits) = arithmetic::subtract_floating(&self.digits, value)?;
        Ok(Integer::from_parts(sign * outer_sign, digits))
    }

    /// Number of digits in the magnitude
    #[inline]
    pub(crate) fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Format the magnitude in base, for the fmt traits
    pub(crate) fn magnitude_string(&self, base: u32) -> Result<String, fmt::Error> {
        string_from_digits(&self.digits, base).map_err(|_| fmt::Error)
    }
}

impl Default for Integer {
    #[inline]
    fn default() -> Integer {
        Zero::zero()
    }
}

impl Zero for Integer {
    #[inline]
    fn zero() -> Integer {
        Integer::from_parts(Sign::Zero, DigitVec::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign.is_zero()
    }
}

impl One for Integer {
    #[inline]
    fn one() -> Integer {
        Integer::from_parts(Sign::Positive, DigitVec::from_vec(vec![1]))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.digit_count() < 8 {
            write!(f, "Integer(\"{}\")", self)
        } else {
            write!(f, "Integer({:?}, {:?})", self.sign, self.digits.as_slice())
        }
    }
}


#[rustfmt::skip]
#[cfg(test)]
#[allow(non_snake_case)]
mod integer_tests {
    use crate::{stdlib, Integer, Error, Sign, DigitVec};
    use crate::stdlib::cmp::Ordering;
    use crate::stdlib::string::ToString;
    use crate::bigdigit::DIGIT_MAX;
    use num_traits::{ToPrimitive, FromPrimitive, Zero, One, Num};
    use paste::paste;

    include!("lib.tests.rs");
}
