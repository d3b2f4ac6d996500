//! Digit types and constants
//!
//! A bigdigit is one element of the little-endian positional
//! representation of an [`Integer`](crate::Integer) magnitude. Its width
//! is exactly half the width of the accumulator type, so the product of
//! two digits plus two more digits always fits in an accumulator.
//!

pub(crate) mod radix;
pub mod digitvec;

pub use self::digitvec::DigitVec;


/// Largest native unsigned integer type, used to hold intermediate
/// products and sums
pub type AccumulatorType = u128;

/// Signed counterpart of [`AccumulatorType`]
pub type SignedAccumulatorType = i128;

/// Narrowest native unsigned type at least half as wide as the accumulator
pub type DigitType = u64;

/// Number of bits in a single digit
pub const DIGIT_BITS: u32 = AccumulatorType::BITS / 2;

/// Largest value a single digit may hold: 2<sup>DIGIT_BITS</sup> - 1
pub const DIGIT_MAX: DigitType = DigitType::MAX;

/// Radix of the internal representation: 2<sup>DIGIT_BITS</sup>
pub const DIGIT_BASE: AccumulatorType = 1 << DIGIT_BITS;

// digit * digit + digit + digit must never overflow the accumulator
const _: () = assert!(DigitType::BITS * 2 <= AccumulatorType::BITS);
const _: () = assert!(DIGIT_MAX as AccumulatorType == DIGIT_BASE - 1);
const _: () = assert!(
    (DIGIT_MAX as AccumulatorType) * (DIGIT_MAX as AccumulatorType)
        <= AccumulatorType::MAX - 2 * (DIGIT_MAX as AccumulatorType)
);


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_is_half_of_accumulator() {
        assert_eq!(DIGIT_BITS, 64);
        assert_eq!(DIGIT_BITS, DigitType::BITS);
        assert_eq!(DIGIT_BASE, (DIGIT_MAX as AccumulatorType) + 1);
    }

    #[test]
    fn max_product_plus_carries_fits() {
        let max = DIGIT_MAX as AccumulatorType;
        let sum = max.checked_mul(max)
                     .and_then(|p| p.checked_add(max))
                     .and_then(|p| p.checked_add(max));
        assert_eq!(sum, Some(AccumulatorType::MAX));
    }
}
