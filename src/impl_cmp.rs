//! Implementation of comparison operations
//!
//! Integers compare by sign first and then by magnitude, with the
//! magnitude order reversed for negative values. Comparisons with
//! primitive integers convert the primitive first.
//!

use crate::*;

use stdlib::cmp::Ordering;


impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match self.sign().cmp(&other.sign()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let magnitude_ord = arithmetic::compare(self.magnitude(), other.magnitude());
        if self.is_negative() {
            magnitude_ord.reverse()
        } else {
            magnitude_ord
        }
    }
}


macro_rules! impl_cmp_for_primitive {
    ($t:ty) => {
        impl PartialEq<$t> for Integer {
            fn eq(&self, rhs: &$t) -> bool {
                *self == Integer::from(*rhs)
            }
        }

        impl PartialEq<Integer> for $t {
            fn eq(&self, rhs: &Integer) -> bool {
                rhs == self
            }
        }

        impl PartialOrd<$t> for Integer {
            fn partial_cmp(&self, rhs: &$t) -> Option<Ordering> {
                Some(self.cmp(&Integer::from(*rhs)))
            }
        }

        impl PartialOrd<Integer> for $t {
            fn partial_cmp(&self, rhs: &Integer) -> Option<Ordering> {
                Some(Integer::from(*self).cmp(rhs))
            }
        }
    };
}

impl_cmp_for_primitive!(u8);
impl_cmp_for_primitive!(u16);
impl_cmp_for_primitive!(u32);
impl_cmp_for_primitive!(u64);
impl_cmp_for_primitive!(u128);
impl_cmp_for_primitive!(usize);
impl_cmp_for_primitive!(i8);
impl_cmp_for_primitive!(i16);
impl_cmp_for_primitive!(i32);
impl_cmp_for_primitive!(i64);
impl_cmp_for_primitive!(i128);
impl_cmp_for_primitive!(isize);
