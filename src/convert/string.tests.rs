// Test contents of convert/string.rs

use crate::bigdigit::DIGIT_MAX;

/// 987654321 written in every supported base
mod cross_base_987654321 {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let digits = digits_from_string(b"987654321", 10).unwrap();
                assert_eq!(digits.as_slice(), &[987654321]);

                let s = string_from_digits(&digits, $base).unwrap();
                assert_eq!(s, $expected);

                let parsed = digits_from_string($expected.as_bytes(), $base).unwrap();
                assert_eq!(parsed, digits);
            }
        };
    }

    impl_case!(base_2: 2 => "111010110111100110100010110001");
    impl_case!(base_3: 3 => "2112211110001000200");
    impl_case!(base_4: 4 => "322313212202301");
    impl_case!(base_5: 5 => "4010314414241");
    impl_case!(base_6: 6 => "242000505413");
    impl_case!(base_7: 7 => "33321631443");
    impl_case!(base_8: 8 => "7267464261");
    impl_case!(base_9: 9 => "2484401020");
    impl_case!(base_10: 10 => "987654321");
    impl_case!(base_11: 11 => "467561345");
    impl_case!(base_12: 12 => "23691b269");
    impl_case!(base_13: 13 => "129806a54");
    impl_case!(base_14: 14 => "95256493");
    impl_case!(base_15: 15 => "5ba934b6");
    impl_case!(base_16: 16 => "3ade68b1");
    impl_case!(base_17: 17 => "26fa3d00");
    impl_case!(base_18: 18 => "1b0c6fe9");
    impl_case!(base_19: 19 => "11igbha7");
    impl_case!(base_20: 20 => "f8cgfg1");
    impl_case!(base_21: 21 => "bah8ck3");
    impl_case!(base_22: 22 => "8fe2k25");
    impl_case!(base_23: 23 => "6fa7j95");
    impl_case!(base_24: 24 => "540klf9");
    impl_case!(base_25: 25 => "4139lml");
    impl_case!(base_26: 26 => "353792h");
    impl_case!(base_27: 27 => "2emc10i");
    impl_case!(base_28: 28 => "21anf4h");
    impl_case!(base_29: 29 => "1j4bppg");
    impl_case!(base_30: 30 => "1aj9nkl");
    impl_case!(base_31: 31 => "13fdo0p");
    impl_case!(base_32: 32 => "tdsq5h");
    impl_case!(base_33: 33 => "p7quur");
    impl_case!(base_34: 34 => "lp2k8h");
    impl_case!(base_35: 35 => "is5nev");
    impl_case!(base_36: 36 => "gc0uy9");
    impl_case!(base_37: 37 => "OIkQGB");
    impl_case!(base_38: 38 => "MRZJFH");
    impl_case!(base_39: 39 => "KkjiOe");
    impl_case!(base_40: 40 => "JZgDmB");
    impl_case!(base_41: 41 => "IVVJeg");
    impl_case!(base_42: 42 => "HXQifD");
    impl_case!(base_43: 43 => "GemJoG");
    impl_case!(base_44: 44 => "FrWQBF");
    impl_case!(base_45: 45 => "FPmUXk");
    impl_case!(base_46: 46 => "EkanQF");
    impl_case!(base_47: 47 => "EOSohi");
    impl_case!(base_48: 48 => "DqCdTh");
    impl_case!(base_49: 49 => "DYPtLf");
    impl_case!(base_50: 50 => "DIBLkV");
    impl_case!(base_51: 51 => "CryaAA");
    impl_case!(base_52: 52 => "CfEIoR");
    impl_case!(base_53: 53 => "CTJBcK");
    impl_case!(base_54: 54 => "CIINot");
    impl_case!(base_55: 55 => "B0zRQQ");
    impl_case!(base_56: 56 => "BsX0sR");
    impl_case!(base_57: 57 => "BkgGJt");
    impl_case!(base_58: 58 => "BdP5Mt");
    impl_case!(base_59: 59 => "BWd3Ks");
    impl_case!(base_60: 60 => "BQMcZV");
    impl_case!(base_61: 61 => "BKUQHb");
    impl_case!(base_62: 62 => "BE0GAZ");
    impl_case!(base_63: 63 => "+r3Gt");
    impl_case!(base_64: 64 => "63mix");
}

mod parse {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $base:literal => [$($digits:expr),*]) => {
            #[test]
            fn $name() {
                let digits = digits_from_string($input, $base).unwrap();
                assert_eq!(digits.as_slice(), &[$($digits),*]);
            }
        };
    }

    impl_case!(case_0: b"0", 10 => [0]);
    impl_case!(case_000: b"000", 10 => [0]);
    impl_case!(case_leading_zeros: b"0000000000000000000000000000000000000042", 10 => [42]);
    impl_case!(case_digit_max_hex: b"ffffffffffffffff", 16 => [DIGIT_MAX]);
    impl_case!(case_digit_max_hex_upper: b"FFFFFFFFFFFFFFFF", 16 => [DIGIT_MAX]);
    impl_case!(case_digit_base_hex: b"10000000000000000", 16 => [0, 1]);
    impl_case!(case_digit_base_dec: b"18446744073709551616", 10 => [0, 1]);
    impl_case!(case_u128_max: b"340282366920938463463374607431768211455", 10 => [DIGIT_MAX, DIGIT_MAX]);
    impl_case!(case_binary: b"101", 2 => [5]);
    impl_case!(case_base64_zero: b"AAAA", 64 => [0]);
    impl_case!(case_base64_slash: b"B/", 64 => [127]);
    impl_case!(case_base64_digits: b"0", 64 => [52]);
    impl_case!(case_base36_z: b"Zz", 36 => [1295]);
    impl_case!(case_pi100: b"31415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679", 10 => [10686169104128798711, 7849733902273087162, 11419148344871743026, 79130234824454320, 16971786432492145963, 14707]);
}

mod parse_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $base:literal => $message:literal) => {
            #[test]
            fn $name() {
                let err = digits_from_string($input, $base).unwrap_err();
                match err {
                    Error::InvalidArgument(msg) => assert_eq!(msg, $message),
                    err => panic!("unexpected error {:?}", err),
                }
            }
        };
    }

    impl_case!(case_question_mark: b"?", 10 => "invalid token '?' for base 10");
    impl_case!(case_digit_too_big: b"1012", 2 => "invalid token '2' for base 2");
    impl_case!(case_hex_in_decimal: b"12a", 10 => "invalid token 'a' for base 10");
    impl_case!(case_leading_zeros_then_bad: b"000-1", 10 => "invalid token '-' for base 10");
    impl_case!(case_space: b"1 2", 10 => "invalid token ' ' for base 10");
    impl_case!(case_minus_in_base64: b"-A", 64 => "invalid token '-' for base 64");
    impl_case!(case_slash_in_base63: b"A/", 63 => "invalid token '/' for base 63");
    impl_case!(case_empty: b"", 10 => "cannot parse empty token string");
    impl_case!(case_base_1: b"0", 1 => "base 1 is not supported (must be within 2..=64)");
    impl_case!(case_base_65: b"0", 65 => "base 65 is not supported (must be within 2..=64)");

    #[test]
    fn invalid_token_after_many_chunks() {
        let mut tokens = vec![b'7'; 100];
        tokens.push(b'x');
        assert!(digits_from_string(&tokens, 10).is_err());
    }
}

mod format {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($digits:expr),*], $base:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let s = string_from_digits(&[$($digits),*], $base).unwrap();
                assert_eq!(s, $expected);
            }
        };
    }

    impl_case!(case_0: [0], 10 => "0");
    impl_case!(case_0_unnormalized: [0, 0], 10 => "0");
    impl_case!(case_0_base64: [0], 64 => "A");
    impl_case!(case_digit_max: [DIGIT_MAX], 10 => "18446744073709551615");
    impl_case!(case_digit_max_hex: [DIGIT_MAX], 16 => "ffffffffffffffff");
    impl_case!(case_digit_base: [0, 1], 10 => "18446744073709551616");
    impl_case!(case_digit_base_36: [0, 1], 36 => "3w5e11264sgsg");
    impl_case!(case_u128_max_64: [DIGIT_MAX, DIGIT_MAX], 64 => "D/////////////////////");
    impl_case!(case_u128_max_binary: [DIGIT_MAX, DIGIT_MAX], 2 => "11111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111111");
    impl_case!(case_1e19: [10000000000000000000], 10 => "10000000000000000000");
    impl_case!(case_pi100: [10686169104128798711, 7849733902273087162, 11419148344871743026, 79130234824454320, 16971786432492145963, 14707], 10 => "31415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679");
    impl_case!(case_pi100_base7: [10686169104128798711, 7849733902273087162, 11419148344871743026, 79130234824454320, 16971786432492145963, 14707], 7 => "56515666422241562243512013162545562521235044426526645002651345005633015565451504200024246305201346362600014311446046500");

    #[test]
    fn token_values_most_significant_first() {
        let values = token_values_from_digits(&[255], 16).unwrap();
        assert_eq!(values, vec![15, 15]);

        let values = token_values_from_digits(&[0], 3).unwrap();
        assert_eq!(values, vec![0]);

        let values = token_values_from_digits(&[0, 1], 64).unwrap();
        assert_eq!(values, vec![16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn unsupported_base() {
        assert!(string_from_digits(&[1], 0).is_err());
        assert!(string_from_digits(&[1], 65).is_err());
        assert!(token_values_from_digits(&[1], 1).is_err());
    }
}

mod round_trip {
    use super::*;

    fn sample_digit_vectors() -> Vec<Vec<DigitType>> {
        vec![
            vec![0],
            vec![1],
            vec![DIGIT_MAX],
            vec![0, 1],
            vec![DIGIT_MAX, DIGIT_MAX, DIGIT_MAX],
            vec![12312739301371248917, 6692605942763486917],
            vec![10686169104128798711, 7849733902273087162, 11419148344871743026, 79130234824454320, 16971786432492145963, 14707],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7],
        ]
    }

    #[test]
    fn all_bases() {
        for digits in sample_digit_vectors() {
            for base in 2..=64 {
                let s = string_from_digits(&digits, base).unwrap();
                let parsed = digits_from_string(s.as_bytes(), base).unwrap();
                assert_eq!(parsed.as_slice(), digits.as_slice(), "base {}: {}", base, s);
            }
        }
    }

    #[test]
    fn base_36_is_case_insensitive() {
        let digits = [10686169104128798711, 7849733902273087162, 11419148344871743026, 79130234824454320, 16971786432492145963, 14707];
        for base in 11..=36 {
            let s = string_from_digits(&digits, base).unwrap().to_ascii_uppercase();
            let parsed = digits_from_string(s.as_bytes(), base).unwrap();
            assert_eq!(parsed.as_slice(), &digits);
        }
    }
}
