mod new {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $sign:ident [$($d:expr),*] => $expected_sign:ident) => {
            #[test]
            fn $name() {
                let n = Integer::new(Sign::$sign, DigitVec::from_vec(vec![$($d),*]));
                assert_eq!(n.sign(), Sign::$expected_sign);
                assert_eq!(n.is_zero(), Sign::$expected_sign == Sign::Zero);
            }
        };
    }

    impl_case!(case_positive_zero: Positive [0] => Zero);
    impl_case!(case_negative_zero: Negative [0, 0, 0] => Zero);
    impl_case!(case_zero_one: Zero [1] => Positive);
    impl_case!(case_negative_one: Negative [1] => Negative);
    impl_case!(case_positive_untrimmed: Positive [5, 0] => Positive);

    #[test]
    fn digits_are_trimmed() {
        let n = Integer::new(Sign::Negative, DigitVec::from_vec(vec![5, 0, 0]));
        assert_eq!(n.magnitude(), &[5]);
        assert_eq!(n.digits().len(), 1);
        assert_eq!(n.into_parts(), (Sign::Negative, DigitVec::from_vec(vec![5])));
    }

    #[test]
    fn default_is_zero() {
        let n = Integer::default();
        assert!(n.is_zero());
        assert_eq!(n.magnitude(), &[0]);
        assert_eq!(n, Integer::zero());
    }

    #[test]
    fn one() {
        assert!(Integer::one().is_one());
        assert_eq!(Integer::one().magnitude(), &[1]);
    }
}


mod scenarios {
    use super::*;

    #[test]
    fn digit_max_minus_7() {
        let a = Integer::new(Sign::Positive, DigitVec::from_vec(vec![DIGIT_MAX]));
        let b = Integer::from(7);
        let diff = &a - &b;
        assert_eq!(diff.sign(), Sign::Positive);
        assert_eq!(diff.magnitude(), &[DIGIT_MAX - 7]);
        assert_eq!(a - 7u8, diff);
    }

    #[test]
    fn zero_minus_digit_max() {
        let a = Integer::zero();
        let b = Integer::new(Sign::Positive, DigitVec::from_vec(vec![DIGIT_MAX]));
        let diff = &a - &b;
        assert_eq!(diff.sign(), Sign::Negative);
        assert_eq!(diff.magnitude(), &[DIGIT_MAX]);
    }

    #[test]
    fn bare_hex_prefix_is_error() {
        let err = Integer::from_str_radix("0x", 0).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("cannot parse empty token string".to_string()));
    }

    #[test]
    fn unknown_token_is_error() {
        let err = Integer::from_str_radix("12?4", 10).unwrap_err();
        assert_eq!(err.to_string(), "invalid token '?' for base 10");
    }

    #[test]
    fn unsupported_base_is_error() {
        assert!(matches!(Integer::from_str_radix("1", 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(Integer::from_str_radix("1", 65), Err(Error::InvalidArgument(_))));
        assert!(Integer::from(1).to_str_radix(65).is_err());
        assert!(Integer::from(1).to_str_radix(0).is_err());
    }
}


mod sign_prefix {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $base:literal => $expected:expr) => {
            #[test]
            fn $name() {
                let n = Integer::from_str_radix($input, $base).unwrap();
                assert_eq!(n, Integer::from($expected));
            }
        };
    }

    impl_case!(case_n1_base10: "-1", 10 => -1);
    impl_case!(case_p1_base10: "+1", 10 => 1);
    impl_case!(case_nz_base36: "-z", 36 => -35);
    // base 62 uses the case-sensitive alphabet, '1' has value 53
    impl_case!(case_n1_base62: "-1", 62 => -53);
    // '+' is a token of value 62 in bases 63 and 64
    impl_case!(case_p1_base63: "+1", 63 => 3959);
    impl_case!(case_p1_base64: "+1", 64 => 4021);

    #[test]
    fn minus_is_not_a_token_above_62() {
        let err = Integer::from_str_radix("-1", 63).unwrap_err();
        assert_eq!(err.to_string(), "invalid token '-' for base 63");
        assert!(Integer::from_str_radix("-1", 64).is_err());
    }
}


mod to_str_radix {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: Integer = $input.parse().unwrap();
                assert_eq!(n.to_str_radix($base).unwrap(), $expected);
                assert_eq!(Integer::from_str_radix($expected, $base).unwrap(), n);
            }
        };
    }

    impl_case!(case_0_base2: "0", 2 => "0");
    impl_case!(case_n255_base16: "-255", 16 => "-ff");
    impl_case!(case_987654321_base64: "987654321", 64 => "63mix");
    impl_case!(case_2p64_base2: "18446744073709551616", 2 => "10000000000000000000000000000000000000000000000000000000000000000");
    impl_case!(case_n2p64_base36: "-18446744073709551616", 36 => "-3w5e11264sgsg");
}


mod wrapping {
    use super::*;

    #[test]
    fn to_u128_wrapping() {
        assert_eq!(Integer::from(-1).to_u128_wrapping(), u128::MAX);
        assert_eq!(Integer::from(0).to_u128_wrapping(), 0);
        assert_eq!(Integer::from(u128::MAX).to_u128_wrapping(), u128::MAX);

        let n: Integer = "340282366920938463463374607431768211461".parse().unwrap();
        assert_eq!(n.to_u128_wrapping(), 5);
        assert_eq!((-n).to_u128_wrapping(), 5u128.wrapping_neg());
    }

    #[test]
    fn to_i128_wrapping() {
        assert_eq!(Integer::from(-1).to_i128_wrapping(), -1);
        assert_eq!(Integer::from(i128::MIN).to_i128_wrapping(), i128::MIN);

        let n: Integer = "170141183460469231731687303715884105728".parse().unwrap();
        assert_eq!(n.to_i128_wrapping(), i128::MIN);
        assert_eq!(n.to_i128(), None);
    }
}


mod div_rem {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal => $q:literal, $r:literal) => {
            #[test]
            fn $name() {
                let a: Integer = $a.parse().unwrap();
                let b: Integer = $b.parse().unwrap();
                let (q, r) = a.div_rem(&b).unwrap();
                assert_eq!(q, $q.parse::<Integer>().unwrap());
                assert_eq!(r, $r.parse::<Integer>().unwrap());
                assert_eq!(&q * &b + &r, a);
            }
        };
    }

    impl_case!(case_7_2: "7" / "2" => "3", "1");
    impl_case!(case_n7_2: "-7" / "2" => "-3", "-1");
    impl_case!(case_0_n3: "0" / "-3" => "0", "0");
    impl_case!(case_large:
        "123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789"
        / "987654321987654321987654321987654321987654321"
        => "124999998860937500014238281249822021484377224856445283551794433",
           "943805007943805007943805008067261797067261796");
    impl_case!(case_large_neg:
        "-123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789123456789"
        / "987654321987654321987654321987654321987654321"
        => "-124999998860937500014238281249822021484377224856445283551794433",
           "-943805007943805007943805008067261797067261796");

    #[test]
    fn by_zero() {
        let a = Integer::from(5);
        assert_eq!(a.div_rem(&Integer::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.checked_div(&Integer::zero()), None);
        assert_eq!(a.checked_rem(&Integer::zero()), None);
        assert_eq!(Error::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn context_threshold_does_not_change_result() {
        let a: Integer = "3".repeat(2000).parse().unwrap();
        let b: Integer = "7".repeat(700).parse().unwrap();

        let recursive = crate::Context::default().with_division_threshold(1);
        let long = crate::Context::default().with_division_threshold(usize::MAX);

        let x = a.div_rem_with_context(&b, &recursive).unwrap();
        let y = a.div_rem_with_context(&b, &long).unwrap();
        assert_eq!(x, y);
        assert_eq!(&x.0 * &b + &x.1, a);
    }
}


mod identities {
    use super::*;

    fn samples() -> Vec<Integer> {
        [
            "0", "1", "-1", "7", "-7",
            "18446744073709551615", "-18446744073709551616",
            "340282366920938463463374607431768211456",
            "-98765432109876543210987654321098765432109876543210",
        ].iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn additive() {
        for x in samples() {
            assert_eq!(&x - &x, Integer::zero());
            assert_eq!(&x - Integer::zero(), x);
            assert_eq!(&x + (-&x), Integer::zero());
            for y in samples() {
                assert_eq!(&x - &y, -(&y - &x));
                assert_eq!(&(&x + &y) - &y, x);
            }
        }
    }

    #[test]
    fn multiplicative() {
        for x in samples() {
            assert_eq!(&x * Integer::one(), x);
            assert!((&x * Integer::zero()).is_zero());
            for y in samples().into_iter().filter(|y| !y.is_zero()) {
                let (q, r) = (&x * &y).div_rem(&y).unwrap();
                assert_eq!(q, x);
                assert!(r.is_zero());
            }
        }
    }

    #[test]
    fn ordering() {
        let mut values = samples();
        values.sort();
        for pair in values.windows(2) {
            assert_eq!(pair[0].cmp(&pair[1]), Ordering::Less);
            assert!((&pair[1] - &pair[0]).is_positive());
        }
    }
}


mod misc {
    use super::*;

    #[test]
    fn hash_agrees_with_eq() {
        use stdlib::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        fn hash(n: &Integer) -> u64 {
            let mut hasher = DefaultHasher::new();
            n.hash(&mut hasher);
            hasher.finish()
        }

        let a: Integer = "0x10000000000000000".parse().unwrap();
        let b = Integer::from(u64::MAX) + 1u8;
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn parse_bytes() {
        assert_eq!(Integer::parse_bytes(b"-zz", 36), Some(Integer::from(-1295)));
        assert_eq!(Integer::parse_bytes(b"0b11", 0), Some(Integer::from(3)));
        assert_eq!(Integer::parse_bytes(&[0xff, 0xfe], 10), None);
        assert_eq!(Integer::parse_bytes(b"12a", 10), None);
    }

    #[test]
    fn abs() {
        assert_eq!(Integer::from(-12).abs(), Integer::from(12));
        assert_eq!(Integer::from(12).abs(), Integer::from(12));
        assert!(Integer::zero().abs().is_zero());
    }

    #[test]
    fn sub_float() {
        let n = Integer::from(u64::MAX);
        assert_eq!(n.sub_float(18446744073709551616.0f64).unwrap(), Integer::from(-1));
        assert_eq!(Integer::zero().sub_float(-3.5f64).unwrap(), Integer::from(3));
        assert_eq!(Integer::from(3).sub_float(3.99f32).unwrap(), Integer::zero());
        assert!(Integer::from(3).sub_float(f32::INFINITY).is_err());
    }

    #[test]
    fn num_traits_round_trip() {
        let n = <Integer as Num>::from_str_radix("-ffffffffffffffffffff", 16).unwrap();
        assert_eq!(n.to_i128(), Some(-0xffffffffffffffffffff));
        assert_eq!(Integer::from_i128(-0xffffffffffffffffffff), Some(n));
    }

    #[test]
    fn error_display() {
        let err = Error::InvalidArgument("bad".to_string());
        assert_eq!(err.to_string(), "bad");
    }
}
