//! Little-endian vectors of bigdigits

use crate::stdlib::{
    cmp::Ordering,
    ops::Deref,
    slice,
    Vec,
};

use num_traits::Zero;

use super::DigitType;


/// Vector of digits, least significant digit first
///
/// A `DigitVec` is never empty and carries no zeros in its most
/// significant positions, so numeric zero is always the single digit
/// `[0]`. Constructors normalize their input to uphold this.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitVec {
    digits: Vec<DigitType>,
}

impl DigitVec {
    /// The canonical zero vector `[0]`
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Construct from vector of little-endian digits, stripping
    /// significant zeros
    pub fn from_vec(mut v: Vec<DigitType>) -> Self {
        strip_significant_zeros(&mut v);
        if v.is_empty() {
            v.push(0);
        }
        Self { digits: v }
    }

    /// Construct from slice of little-endian digits
    pub fn from_slice(d: &[DigitType]) -> Self {
        Self::from_vec(trim_significant_zeros(d).to_vec())
    }

    /// True if this is the canonical zero
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0].is_zero()
    }

    /// Number of bigdigits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Borrow digits as slice
    pub fn as_slice(&self) -> &[DigitType] {
        &self.digits
    }

    /// Iterate over digits from least to most significance
    pub fn iter(&self) -> slice::Iter<'_, DigitType> {
        self.digits.iter()
    }

    /// Convert to inner vector
    pub fn into_vec(self) -> Vec<DigitType> {
        self.digits
    }
}

impl Default for DigitVec {
    fn default() -> Self {
        Self::zero()
    }
}

impl Deref for DigitVec {
    type Target = [DigitType];

    fn deref(&self) -> &[DigitType] {
        &self.digits
    }
}

impl AsRef<[DigitType]> for DigitVec {
    fn as_ref(&self) -> &[DigitType] {
        &self.digits
    }
}

impl From<Vec<DigitType>> for DigitVec {
    fn from(v: Vec<DigitType>) -> Self {
        Self::from_vec(v)
    }
}

impl From<DigitVec> for Vec<DigitType> {
    fn from(v: DigitVec) -> Self {
        v.digits
    }
}

impl PartialOrd for DigitVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitVec {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digit_slices(&self.digits, &other.digits)
    }
}


/// Remove any zeros at the location of highest significance, if all zeros
/// the vector will be cleared
pub(crate) fn strip_significant_zeros(digits: &mut Vec<DigitType>) {
    if let Some(idx) = digits.iter().rposition(|d| !d.is_zero()) {
        digits.truncate(idx + 1);
    } else {
        digits.clear();
    }
}

/// Return subslice without significant zeros (may be empty)
pub(crate) fn trim_significant_zeros(digits: &[DigitType]) -> &[DigitType] {
    match digits.iter().rposition(|d| !d.is_zero()) {
        Some(idx) => &digits[..=idx],
        None => &[],
    }
}

/// Compare magnitudes of two little-endian digit slices
///
/// Significant zeros are ignored, so unnormalized slices compare by value.
///
pub(crate) fn compare_digit_slices(a: &[DigitType], b: &[DigitType]) -> Ordering {
    let a = trim_significant_zeros(a);
    let b = trim_significant_zeros(b);

    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        ord => ord,
    }
}
