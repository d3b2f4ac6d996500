//! Addition operator trait implementation
//!

use crate::*;
use stdlib::iter::Sum;
use stdlib::ops::{Add, AddAssign};


/// Sum of two signed magnitudes
pub(crate) fn add_signed(a_sign: Sign, a: &[DigitType], b_sign: Sign, b: &[DigitType]) -> Integer {
    match (a_sign, b_sign) {
        (_, Sign::Zero) => Integer::from_parts(a_sign, DigitVec::from_slice(a)),
        (Sign::Zero, _) => Integer::from_parts(b_sign, DigitVec::from_slice(b)),
        _ if a_sign == b_sign => Integer::from_parts(a_sign, arithmetic::add(a, b)),
        _ => {
            // opposite signs: |a| - |b| carries the sign of a
            let (sign, digits) = arithmetic::subtract(a, b);
            Integer::from_parts(a_sign * sign, digits)
        }
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn add(self, rhs: &Integer) -> Integer {
        add_signed(self.sign, &self.digits, rhs.sign, &rhs.digits)
    }
}

forward_all_binop_to_ref_ref!(impl Add for Integer, add);
forward_assignop_to_ref_ref!(impl AddAssign for Integer, add_assign => Add::add);


impl Sum for Integer {
    fn sum<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Zero::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Zero::zero(), |acc, x| acc + x)
    }
}
