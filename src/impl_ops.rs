//! Implement math operations with primitive operands: Add, Sub, etc
//!
//! Primitive operands go straight to the scalar forms of the kernel
//! operations, without building a temporary `Integer`.
//!

use crate::*;
use stdlib::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};


/// Primitive integer split into sign and magnitude
trait SignMagnitude: Copy {
    fn sign_magnitude(self) -> (Sign, u128);
}

macro_rules! impl_sign_magnitude {
    (unsigned: $($t:ty),*) => {
        $(
            impl SignMagnitude for $t {
                #[inline]
                fn sign_magnitude(self) -> (Sign, u128) {
                    let sign = if self == 0 { Sign::Zero } else { Sign::Positive };
                    (sign, self as u128)
                }
            }
        )*
    };
    (signed: $($t:ty),*) => {
        $(
            impl SignMagnitude for $t {
                #[inline]
                fn sign_magnitude(self) -> (Sign, u128) {
                    let sign = match self {
                        0 => Sign::Zero,
                        n if n < 0 => Sign::Negative,
                        _ => Sign::Positive,
                    };
                    (sign, self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

impl_sign_magnitude!(unsigned: u8, u16, u32, u64, u128, usize);
impl_sign_magnitude!(signed: i8, i16, i32, i64, i128, isize);


fn add_primitive(lhs: &Integer, (sign, magnitude): (Sign, u128)) -> Integer {
    match (lhs.sign, sign) {
        (_, Sign::Zero) => lhs.clone(),
        (Sign::Zero, _) => Integer::from_sign_magnitude(sign, magnitude),
        (a, b) if a == b => Integer::from_parts(a, arithmetic::add_integral(&lhs.digits, magnitude)),
        (a, _) => {
            let (diff_sign, digits) = arithmetic::subtract_integral(&lhs.digits, magnitude);
            Integer::from_parts(a * diff_sign, digits)
        }
    }
}

fn primitive_add(lhs: (Sign, u128), rhs: &Integer) -> Integer {
    add_primitive(rhs, lhs)
}

fn sub_primitive(lhs: &Integer, (sign, magnitude): (Sign, u128)) -> Integer {
    add_primitive(lhs, (-sign, magnitude))
}

fn primitive_sub((sign, magnitude): (Sign, u128), rhs: &Integer) -> Integer {
    // p - x == -(x - p)
    -add_primitive(rhs, (-sign, magnitude))
}

fn mul_primitive(lhs: &Integer, (sign, magnitude): (Sign, u128)) -> Integer {
    if lhs.is_zero() || sign.is_zero() {
        return Integer::zero();
    }
    let digits = arithmetic::multiply_integral(&lhs.digits, magnitude);
    Integer::from_parts(lhs.sign * sign, digits)
}

fn primitive_mul(lhs: (Sign, u128), rhs: &Integer) -> Integer {
    mul_primitive(rhs, lhs)
}

fn div_rem_primitive(lhs: &Integer, (sign, magnitude): (Sign, u128)) -> (Integer, Integer) {
    let (quotient, remainder) = match arithmetic::long_divide_integral(&lhs.digits, magnitude) {
        Ok(qr) => qr,
        Err(err) => panic!("{}", err),
    };
    let quotient_sign = arithmetic::sign_from_digits(&quotient, lhs.sign * sign);
    let remainder_sign = arithmetic::sign_from_digits(&remainder, lhs.sign);
    (Integer::from_parts(quotient_sign, quotient), Integer::from_parts(remainder_sign, remainder))
}

fn div_primitive(lhs: &Integer, rhs: (Sign, u128)) -> Integer {
    div_rem_primitive(lhs, rhs).0
}

fn primitive_div((sign, magnitude): (Sign, u128), rhs: &Integer) -> Integer {
    &Integer::from_sign_magnitude(sign, magnitude) / rhs
}

fn rem_primitive(lhs: &Integer, rhs: (Sign, u128)) -> Integer {
    div_rem_primitive(lhs, rhs).1
}

fn primitive_rem((sign, magnitude): (Sign, u128), rhs: &Integer) -> Integer {
    &Integer::from_sign_magnitude(sign, magnitude) % rhs
}


macro_rules! impl_binop_for_primitive {
    ($t:ty: $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $lhs_fn:ident, $rhs_fn:ident) => {
        impl $imp<$t> for &Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: $t) -> Integer {
                $lhs_fn(self, rhs.sign_magnitude())
            }
        }

        impl $imp<$t> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: $t) -> Integer {
                $lhs_fn(&self, rhs.sign_magnitude())
            }
        }

        impl $imp<&$t> for &Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &$t) -> Integer {
                $lhs_fn(self, rhs.sign_magnitude())
            }
        }

        impl $imp<&$t> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &$t) -> Integer {
                $lhs_fn(&self, rhs.sign_magnitude())
            }
        }

        impl $imp<&Integer> for $t {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &Integer) -> Integer {
                $rhs_fn(self.sign_magnitude(), rhs)
            }
        }

        impl $imp<Integer> for $t {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                $rhs_fn(self.sign_magnitude(), &rhs)
            }
        }

        impl $assign_imp<$t> for Integer {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                *self = $lhs_fn(self, rhs.sign_magnitude());
            }
        }

        impl $assign_imp<&$t> for Integer {
            #[inline]
            fn $assign_method(&mut self, rhs: &$t) {
                *self = $lhs_fn(self, rhs.sign_magnitude());
            }
        }
    };
}

macro_rules! impl_ops_for_primitive {
    ($($t:ty),*) => {
        $(
            impl_binop_for_primitive!($t: Add::add, AddAssign::add_assign => add_primitive, primitive_add);
            impl_binop_for_primitive!($t: Sub::sub, SubAssign::sub_assign => sub_primitive, primitive_sub);
            impl_binop_for_primitive!($t: Mul::mul, MulAssign::mul_assign => mul_primitive, primitive_mul);
            impl_binop_for_primitive!($t: Div::div, DivAssign::div_assign => div_primitive, primitive_div);
            impl_binop_for_primitive!($t: Rem::rem, RemAssign::rem_assign => rem_primitive, primitive_rem);
        )*
    };
}

impl_ops_for_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);


impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(mut self) -> Integer {
        self.sign = -self.sign;
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        -self.clone()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    /// Check primitive operator against the same operator on `Integer`
    macro_rules! impl_case {
        ($name:ident: $a:literal $op:tt $b:literal : $t:ty => $c:literal) => {
            paste! {
                #[test]
                fn [< $name _ $t >]() {
                    let a: Integer = $a.parse().unwrap();
                    let b: $t = $b;
                    let expected: Integer = $c.parse().unwrap();

                    assert_eq!(&a $op b, expected);
                    assert_eq!(a.clone() $op &b, expected);
                    assert_eq!(&a $op Integer::from(b), expected);
                }
            }
        };
    }

    impl_case!(add_max: "18446744073709551615" + 1 : u8 => "18446744073709551616");
    impl_case!(add_neg: "-5" + 7 : i32 => "2");
    impl_case!(add_zero: "-5" + 0 : u64 => "-5");
    impl_case!(add_to_zero: "0" + -9 : i64 => "-9");
    impl_case!(add_u128: "1" + 340282366920938463463374607431768211455 : u128 => "340282366920938463463374607431768211456");
    impl_case!(add_i128_min: "0" + -170141183460469231731687303715884105728 : i128 => "-170141183460469231731687303715884105728");
    impl_case!(sub_borrow: "18446744073709551616" - 1 : u16 => "18446744073709551615");
    impl_case!(sub_cross_zero: "3" - 10 : usize => "-7");
    impl_case!(sub_negative: "3" - -10 : isize => "13");
    impl_case!(sub_to_zero: "-10" - -10 : i8 => "0");
    impl_case!(mul_zero: "123456789" * 0 : u32 => "0");
    impl_case!(mul_neg: "-123456789" * -2 : i16 => "246913578");
    impl_case!(mul_wide: "18446744073709551616" * 18446744073709551616 : u128 => "340282366920938463463374607431768211456");
    impl_case!(div_truncate: "-7" / 2 : u8 => "-3");
    impl_case!(div_neg: "7" / -2 : i64 => "-3");
    impl_case!(div_wide: "340282366920938463463374607431768211456" / 18446744073709551616 : u128 => "18446744073709551616");
    impl_case!(div_small: "1" / 2 : u8 => "0");
    impl_case!(rem_sign_of_dividend: "-7" % 2 : u8 => "-1");
    impl_case!(rem_neg_divisor: "7" % -2 : i32 => "1");
    impl_case!(rem_wide: "340282366920938463463374607431768211457" % 18446744073709551616 : u128 => "1");

    #[test]
    fn primitive_lhs() {
        let x = Integer::from(10);
        assert_eq!(3u8 + &x, Integer::from(13));
        assert_eq!(3i32 - &x, Integer::from(-7));
        assert_eq!(-3i64 * x.clone(), Integer::from(-30));
        assert_eq!(100u64 / &x, Integer::from(10));
        assert_eq!(-107i16 % x, Integer::from(-7));
        assert_eq!(5u128 - Integer::zero(), Integer::from(5));
    }

    #[test]
    fn assign() {
        let mut x = Integer::from(u64::MAX);
        x += 1u8;
        assert_eq!(x, Integer::from(1u128 << 64));
        x -= &2u64;
        assert_eq!(x, Integer::from(u64::MAX - 1));
        x *= -2i32;
        assert_eq!(x, Integer::from(-2 * (u64::MAX as i128 - 1)));
        x /= 4usize;
        assert_eq!(x, Integer::from(-(u64::MAX as i128 - 1) / 2));
        x %= 1000i64;
        assert_eq!(x, Integer::from(-(u64::MAX as i128 - 1) / 2 % 1000));
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn div_by_zero_primitive() {
        let _ = Integer::from(1) / 0u32;
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn rem_by_zero_primitive() {
        let _ = Integer::from(1) % 0i8;
    }

    #[test]
    fn neg() {
        assert_eq!(-Integer::from(5), Integer::from(-5));
        assert_eq!(-&Integer::from(-5), Integer::from(5));
        assert_eq!((-Integer::zero()).sign(), Sign::Zero);
    }
}
