//! Implement division

use crate::*;
use stdlib::ops::{Div, DivAssign};


impl<'a, 'b> Div<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline]
    fn div(self, other: &Integer) -> Integer {
        match self.div_rem(other) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for Integer, div);
forward_assignop_to_ref_ref!(impl DivAssign for Integer, div_assign => Div::div);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal => $c:literal ) => {
            paste! {
                #[test]
                fn $name() {
                    let a: Integer = $a.parse().unwrap();
                    let b: Integer = $b.parse().unwrap();
                    let c: Integer = $c.parse().unwrap();

                    assert_eq!(c, a.clone() / b.clone());
                    assert_eq!(c, a.clone() / &b);
                    assert_eq!(c, &a / b.clone());
                    assert_eq!(c, &a / &b);

                    let mut x = a.clone();
                    x /= &b;
                    assert_eq!(x, c);

                    let mut x = a;
                    x /= b;
                    assert_eq!(x, c);
                }
            }
        };
    }

    impl_case!(case_0_1: "0" / "1" => "0");
    impl_case!(case_7_2: "7" / "2" => "3");
    impl_case!(case_n7_2: "-7" / "2" => "-3");
    impl_case!(case_7_n2: "7" / "-2" => "-3");
    impl_case!(case_n7_n2: "-7" / "-2" => "3");
    impl_case!(case_1_n2: "1" / "-2" => "0");
    impl_case!(case_2p64_2: "18446744073709551616" / "2" => "9223372036854775808");
    impl_case!(case_2p128_2p64: "340282366920938463463374607431768211456" / "-18446744073709551616" => "-18446744073709551616");
    impl_case!(case_doc_example:
        "121932631124828532112482853211126352690" / "987654321" => "123456789012345678901234567890");

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn divide_by_zero() {
        let _ = Integer::from(5) / Integer::zero();
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn divide_zero_by_zero() {
        let mut x = Integer::zero();
        x /= &Integer::zero();
    }
}
