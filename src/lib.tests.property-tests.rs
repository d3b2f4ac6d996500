// Property tests to be included by lib.rs (if enabled)

use num_bigint::BigInt;


/// Arbitrary integer of up to `max_len` digits
fn integer_strategy(max_len: usize) -> impl Strategy<Value = Integer> {
    (any::<bool>(), prop::collection::vec(any::<u64>(), 1..max_len)).prop_map(|(negative, digits)| {
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Integer::new(sign, DigitVec::from_vec(digits))
    })
}

/// Convert through hexadecimal text to the reference implementation
fn to_bigint(n: &Integer) -> BigInt {
    let hex = n.to_str_radix(16).unwrap();
    BigInt::parse_bytes(hex.as_bytes(), 16).unwrap()
}


mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< add_ $t >](n: $t, m: i128) {
                    let x = Integer::from(m);
                    let sum = n + &x;

                    prop_assert_eq!(&sum, &(&x + n));
                    prop_assert_eq!(&sum, &(x.clone() + n));
                    prop_assert_eq!(&sum, &(Integer::from(n) + &x));

                    let mut s = x;
                    s += n;
                    prop_assert_eq!(sum, s);
                }

                #[test]
                fn [< sub_ $t >](n: $t, m: i128) {
                    let x = Integer::from(m);
                    let diff_n_x = n - &x;
                    let diff_x_n = x.clone() - n;
                    prop_assert_eq!(&diff_n_x, &(-&diff_x_n));
                    prop_assert_eq!(&diff_x_n, &(&x - Integer::from(n)));

                    let mut a = x;
                    a -= n;
                    prop_assert_eq!(&a, &diff_x_n);
                }

                #[test]
                fn [< mul_ $t >](n: $t, m: i128) {
                    let x = Integer::from(m);
                    let prod_n_x = n * &x;
                    let prod_x_n = x.clone() * n;
                    prop_assert_eq!(&prod_n_x, &prod_x_n);
                    prop_assert_eq!(&prod_n_x, &(&x * Integer::from(n)));

                    let mut r = x.clone();
                    r *= n;
                    prop_assert_eq!(&prod_n_x, &r);

                    prop_assert_eq!(-prod_n_x, -x * n);
                }

                #[test]
                fn [< div_ $t >](n: $t, m: i128) {
                    prop_assume!(n != 0);

                    let x = Integer::from(m);
                    let quotient = &x / n;
                    let remainder = &x % n;
                    prop_assert_eq!(&quotient, &(&x / Integer::from(n)));
                    prop_assert_eq!(&remainder, &(&x % Integer::from(n)));
                    prop_assert_eq!(&quotient * n + &remainder, x.clone());

                    let mut q = x;
                    q /= n;
                    prop_assert_eq!(q, quotient);
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
    impl_test!(u128);

    impl_test!(i8);
    impl_test!(i16);
    impl_test!(i32);
    impl_test!(i64);
    impl_test!(i128);
}


mod oracle {
    use super::*;

    proptest! {
        #[test]
        fn add_sub_mul(a in integer_strategy(10), b in integer_strategy(10)) {
            let (x, y) = (to_bigint(&a), to_bigint(&b));

            prop_assert_eq!(to_bigint(&(&a + &b)), &x + &y);
            prop_assert_eq!(to_bigint(&(&a - &b)), &x - &y);
            prop_assert_eq!(to_bigint(&(&a * &b)), &x * &y);
        }

        #[test]
        fn div_rem(a in integer_strategy(40), b in integer_strategy(12)) {
            prop_assume!(!b.is_zero());

            let (q, r) = a.div_rem(&b).unwrap();
            let (x, y) = (to_bigint(&a), to_bigint(&b));

            prop_assert_eq!(to_bigint(&q), &x / &y);
            prop_assert_eq!(to_bigint(&r), &x % &y);
        }

        #[test]
        fn display(a in integer_strategy(10)) {
            prop_assert_eq!(a.to_string(), to_bigint(&a).to_string());
        }

        #[test]
        fn ordering(a in integer_strategy(4), b in integer_strategy(4)) {
            prop_assert_eq!(a.cmp(&b), to_bigint(&a).cmp(&to_bigint(&b)));
        }
    }
}


mod round_trip {
    use super::*;

    proptest! {
        #[test]
        fn string(a in integer_strategy(8), base in 2u32..=62) {
            let s = a.to_str_radix(base).unwrap();
            prop_assert_eq!(Integer::from_str_radix(&s, base).unwrap(), a);
        }

        #[test]
        fn string_unsigned_bases(a in integer_strategy(8), base in 63u32..=64) {
            let magnitude = a.abs();
            let s = magnitude.to_str_radix(base).unwrap();
            prop_assert_eq!(Integer::from_str_radix(&s, base).unwrap(), magnitude);
        }

        #[test]
        fn parse_detected_base(n: i128) {
            let x = Integer::from(n);
            let sign = if n < 0 { "-" } else { "" };
            let m = n.unsigned_abs();

            prop_assert_eq!(&format!("{}0x{:x}", sign, m).parse::<Integer>().unwrap(), &x);
            prop_assert_eq!(&format!("{}0b{:b}", sign, m).parse::<Integer>().unwrap(), &x);
            prop_assert_eq!(&format!("{}0{:o}", sign, m).parse::<Integer>().unwrap(), &x);
            prop_assert_eq!(&format!("{}", n).parse::<Integer>().unwrap(), &x);
        }

        #[test]
        fn wrapping(n: i128) {
            let x = Integer::from(n);
            prop_assert_eq!(x.to_i128_wrapping(), n);
            prop_assert_eq!(x.to_u128_wrapping(), n as u128);
        }

        #[test]
        fn float(f: f64) {
            prop_assume!(f.is_finite());

            let x = Integer::try_from(f).unwrap();
            prop_assert_eq!(x.to_f64().unwrap(), f.trunc());
        }
    }
}
