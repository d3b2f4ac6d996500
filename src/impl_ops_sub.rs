//!
//! Subtraction operator trait implementation
//!

use crate::*;
use crate::impl_ops_add::add_signed;
use stdlib::ops::{Sub, SubAssign};


impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, rhs: &Integer) -> Integer {
        add_signed(self.sign, &self.digits, -rhs.sign, &rhs.digits)
    }
}

impl<'a> Sub<&'a Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, rhs: &Integer) -> Integer {
        if rhs.is_zero() {
            return self;
        }
        &self - rhs
    }
}

impl<'a> Sub<Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, rhs: Integer) -> Integer {
        -(rhs - self)
    }
}

impl Sub<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, rhs: Integer) -> Integer {
        self - &rhs
    }
}

forward_assignop_to_ref_ref!(impl SubAssign for Integer, sub_assign => Sub::sub);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal - $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: Integer = $a.parse().unwrap();
                    let b: Integer = $b.parse().unwrap();
                    let c: Integer = $c.parse().unwrap();

                    assert_eq!(c, a.clone() - b.clone());
                    assert_eq!(c, a.clone() - &b);
                    assert_eq!(c, &a - b.clone());
                    assert_eq!(c, &a - &b);

                    // anti-commutative
                    assert_eq!(-c, &b - &a);
                }

                #[test]
                fn [< $name _assign >]() {
                    let a: Integer = $a.parse().unwrap();
                    let b: Integer = $b.parse().unwrap();
                    let c: Integer = $c.parse().unwrap();

                    let mut x = a.clone();
                    x -= b.clone();
                    assert_eq!(x, c);

                    let mut x = a;
                    x -= &b;
                    assert_eq!(x, c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" - "0" => "0");
    impl_case!(case_0_1: "0" - "1" => "-1");
    impl_case!(case_1_0: "1" - "0" => "1");
    impl_case!(case_7_7: "7" - "7" => "0");
    impl_case!(case_n7_n7: "-7" - "-7" => "0");
    impl_case!(case_12_34: "12" - "34" => "-22");
    impl_case!(case_n12_34: "-12" - "34" => "-46");
    impl_case!(case_12_n34: "12" - "-34" => "46");
    impl_case!(case_digit_max_7: "18446744073709551615" - "7" => "18446744073709551608");
    impl_case!(case_0_digit_max: "0" - "18446744073709551615" => "-18446744073709551615");
    impl_case!(case_2p64_1: "18446744073709551616" - "1" => "18446744073709551615");
    impl_case!(case_1_2p128: "1" - "340282366920938463463374607431768211456" => "-340282366920938463463374607431768211455");
    impl_case!(case_large:
        "100000000000000000000000000000000000000000000000000" - "1"
        => "99999999999999999999999999999999999999999999999999");
}
