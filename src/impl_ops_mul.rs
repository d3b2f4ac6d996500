//! Multiplication operator trait implementation
//!

use crate::*;
use stdlib::iter::Product;
use stdlib::ops::{Mul, MulAssign};


impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, rhs: &Integer) -> Integer {
        if self.is_zero() || rhs.is_zero() {
            return Integer::zero();
        }
        let digits = arithmetic::multiply(&self.digits, &rhs.digits);
        Integer::from_parts(self.sign * rhs.sign, digits)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for Integer, mul);
forward_assignop_to_ref_ref!(impl MulAssign for Integer, mul_assign => Mul::mul);


impl Product for Integer {
    fn product<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(One::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(One::one(), |acc, x| acc * x)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: Integer = $a.parse().unwrap();
                    let b: Integer = $b.parse().unwrap();
                    let c: Integer = $c.parse().unwrap();

                    assert_eq!(c, a.clone() * b.clone());
                    assert_eq!(c, a.clone() * &b);
                    assert_eq!(c, &a * b.clone());
                    assert_eq!(c, &a * &b);
                    assert_eq!(c, &b * &a);
                }

                #[test]
                fn [< $name _assign >]() {
                    let a: Integer = $a.parse().unwrap();
                    let b: Integer = $b.parse().unwrap();
                    let c: Integer = $c.parse().unwrap();

                    let mut x = a.clone();
                    x *= b.clone();
                    assert_eq!(x, c);

                    let mut x = a;
                    x *= &b;
                    assert_eq!(x, c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" * "0" => "0");
    impl_case!(case_0_n5: "0" * "-5" => "0");
    impl_case!(case_1_n1: "1" * "-1" => "-1");
    impl_case!(case_n1_n1: "-1" * "-1" => "1");
    impl_case!(case_12_34: "12" * "34" => "408");
    impl_case!(case_n12_34: "-12" * "34" => "-408");
    impl_case!(case_digit_max_squared: "18446744073709551615" * "18446744073709551615" => "340282366920938463426481119284349108225");
    impl_case!(case_2p64_2p64: "18446744073709551616" * "-18446744073709551616" => "-340282366920938463463374607431768211456");
    impl_case!(case_doc_example:
        "123456789012345678901234567890" * "987654321" => "121932631124828532112482853211126352690");
    impl_case!(case_large_square:
        "123456789012345678901234567890123456789" * "123456789012345678901234567890123456789"
        => "15241578753238836750495351562566681945005334557625361987875019051998750190521");

    #[test]
    fn product() {
        let values = vec![Integer::from(-3), Integer::from(u64::MAX), Integer::from(2)];
        let expected: Integer = "-110680464442257309690".parse().unwrap();
        assert_eq!(values.iter().product::<Integer>(), expected);
        assert_eq!(values.into_iter().product::<Integer>(), expected);

        let empty: Vec<Integer> = Vec::new();
        assert_eq!(empty.into_iter().product::<Integer>(), Integer::one());
    }
}
