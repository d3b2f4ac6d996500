//! Remainder implementations

use crate::*;
use stdlib::ops::{Rem, RemAssign};


impl<'a, 'b> Rem<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn rem(self, other: &Integer) -> Integer {
        match self.div_rem(other) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Rem for Integer, rem);
forward_assignop_to_ref_ref!(impl RemAssign for Integer, rem_assign => Rem::rem);
