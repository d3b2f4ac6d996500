// Test contents of arithmetic/division.rs

use crate::bigdigit::DIGIT_MAX;
use num_bigint::BigUint;


/// Deterministic pseudo-random digits (xorshift64*)
fn pseudo_random_digits(seed: u64, len: usize) -> Vec<DigitType> {
    let mut state = seed.wrapping_mul(0x9E3779B97F4A7C15) | 1;
    (0..len).map(|_| {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state.wrapping_mul(0x2545F4914F6CDD1D)
    }).collect()
}

fn to_biguint(digits: &[DigitType]) -> BigUint {
    let bytes: Vec<u8> = digits.iter().flat_map(|d| d.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn from_biguint(n: &BigUint) -> Vec<DigitType> {
    let mut digits = n.to_u64_digits();
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

/// assert a == q * b + r and r < b
fn assert_division_invariant(a: &[DigitType], b: &[DigitType], q: &DigitVec, r: &DigitVec) {
    assert_eq!(compare(r, b), Ordering::Less);
    let product = multiply(q, b);
    let recombined = add(&product, r);
    assert_eq!(compare(&recombined, a), Ordering::Equal);
}


mod div_rem_digit_in_place {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($a:expr),*] / $b:expr => [$($q:expr),*], $r:expr) => {
            #[test]
            fn $name() {
                let mut digits = vec![$($a),*];
                let r = div_rem_digit_in_place(&mut digits, $b);
                assert_eq!(digits, vec![$($q),*]);
                assert_eq!(r, $r);
            }
        };
    }

    impl_case!(case_0_1: [0] / 1 => [0], 0);
    impl_case!(case_7_2: [7] / 2 => [3], 1);
    impl_case!(case_3_5: [3] / 5 => [0], 3);
    impl_case!(case_digit_base_2: [0, 1] / 2 => [1 << 63], 0);
    impl_case!(case_strips_zeros: [5, 3] / 4 => [(3 << 62) | 1], 1);
    impl_case!(case_digit_max: [DIGIT_MAX, DIGIT_MAX] / DIGIT_MAX => [1, 1], 0);
    impl_case!(case_1e19: [0, 1] / 10_000_000_000_000_000_000 => [1], 8446744073709551616);
}


mod long_divide {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($a:expr),*] / [$($b:expr),*] => [$($q:expr),*], [$($r:expr),*]) => {
            #[test]
            fn $name() {
                let a: &[DigitType] = &[$($a),*];
                let b: &[DigitType] = &[$($b),*];
                let (q, r) = long_divide(a, b).unwrap();
                assert_eq!(q.as_slice(), &[$($q),*]);
                assert_eq!(r.as_slice(), &[$($r),*]);

                let (q, r) = divide_and_conquer_divide(a, b).unwrap();
                assert_eq!(q.as_slice(), &[$($q),*]);
                assert_eq!(r.as_slice(), &[$($r),*]);
            }
        };
    }

    impl_case!(case_0_1: [0] / [1] => [0], [0]);
    impl_case!(case_7_7: [7] / [7] => [1], [0]);
    impl_case!(case_7_2: [7] / [2] => [3], [1]);
    impl_case!(case_small_large: [7] / [0, 1] => [0], [7]);
    impl_case!(case_unnormalized: [8, 0, 0] / [2, 0] => [4], [0]);
    impl_case!(case_digit_base_squared: [0, 0, 1] / [0, 1] => [0, 1], [0]);
    impl_case!(case_u128_max_digit_base: [DIGIT_MAX, DIGIT_MAX] / [0, 1] => [DIGIT_MAX], [DIGIT_MAX]);
    impl_case!(case_max3_max2: [DIGIT_MAX, DIGIT_MAX, DIGIT_MAX] / [DIGIT_MAX, DIGIT_MAX] => [0, 1], [DIGIT_MAX]);
    // 123456789012345678901234567890123456789^2 / 123456789012345678901234567890123456789
    impl_case!(case_square_root:
        [16825814290608958393, 13633508463720600132, 17792175613798593473, 2428123582467303768]
        / [12312739301371248917, 6692605942763486917]
        => [12312739301371248917, 6692605942763486917], [0]);
    impl_case!(case_normalized_three_digit_divisor:
        [0, 0, 0x8000000000000000, 0x7fffffffffffffff] / [1, 0, 0x8000000000000000]
        => [DIGIT_MAX - 1], [2, DIGIT_MAX, 0x7fffffffffffffff]);

    #[test]
    fn division_by_zero() {
        assert_eq!(long_divide(&[1], &[0]), Err(Error::DivisionByZero));
        assert_eq!(long_divide(&[1], &[0, 0]), Err(Error::DivisionByZero));
        assert_eq!(divide_and_conquer_divide(&[1], &[0]), Err(Error::DivisionByZero));
        assert_eq!(long_divide_integral(&[1], 0), Err(Error::DivisionByZero));
    }

    #[test]
    fn integral_divisor() {
        let (q, r) = long_divide_integral(&[DIGIT_MAX, DIGIT_MAX, 1], u128::MAX).unwrap();
        assert_eq!(q.as_slice(), &[2]);
        assert_eq!(r.as_slice(), &[1]);

        let (q, r) = long_divide_integral(&[100], 7).unwrap();
        assert_eq!(q.as_slice(), &[14]);
        assert_eq!(r.as_slice(), &[2]);

        let (q, r) = long_divide_integral(&[5], 1 << 64).unwrap();
        assert_eq!(q.as_slice(), &[0]);
        assert_eq!(r.as_slice(), &[5]);
    }

    #[test]
    fn matches_biguint() {
        for seed in 0..40u64 {
            let a = pseudo_random_digits(seed, 3 + (seed as usize % 9));
            let b = pseudo_random_digits(seed + 1000, 2 + (seed as usize % 4));
            let (q, r) = long_divide(&a, &b).unwrap();

            let expected_q = to_biguint(&a) / to_biguint(&b);
            let expected_r = to_biguint(&a) % to_biguint(&b);
            assert_eq!(q.as_slice(), from_biguint(&expected_q).as_slice());
            assert_eq!(r.as_slice(), from_biguint(&expected_r).as_slice());
        }
    }
}


mod divide_and_conquer {
    use super::*;

    #[test]
    fn equals_long_division_over_size_sweep() {
        for divisor_len in (1..=70).step_by(3) {
            for extra in [0, 1, 2, 15, 16, 17, 40, 90] {
                let seed = (divisor_len * 1000 + extra) as u64;
                let a = pseudo_random_digits(seed, divisor_len + extra);
                let mut b = pseudo_random_digits(seed + 7, divisor_len);

                // vary normalization of the divisor
                let last = b.len() - 1;
                b[last] >>= seed % 64;
                if b[last] == 0 {
                    b[last] = 1;
                }

                let long = long_divide(&a, &b).unwrap();
                let recursive = divide_and_conquer_divide(&a, &b).unwrap();
                assert_eq!(long, recursive, "{} / {} digits", a.len(), b.len());
                assert_division_invariant(&a, &b, &recursive.0, &recursive.1);
            }
        }
    }

    #[test]
    fn quotient_digit_saturates() {
        // a = b * B^n - 1 drives every partial quotient to its maximum
        for n in [17, 33, 40, 64] {
            let mut b = pseudo_random_digits(n as u64, n);
            b[n - 1] |= 1 << 63;
            let mut shifted = vec![0; n];
            shifted.extend_from_slice(&b);
            let (_, a) = subtract(&shifted, &[1]);

            let long = long_divide(&a, &b).unwrap();
            let recursive = divide_and_conquer_divide(&a, &b).unwrap();
            assert_eq!(long, recursive);
            assert_division_invariant(&a, &b, &recursive.0, &recursive.1);
        }
    }

    #[test]
    fn matches_biguint_large() {
        for seed in 0..6u64 {
            let a = pseudo_random_digits(seed, 150 + seed as usize * 13);
            let b = pseudo_random_digits(seed + 99, 48 + seed as usize * 5);
            let (q, r) = divide_and_conquer_divide(&a, &b).unwrap();

            let expected_q = to_biguint(&a) / to_biguint(&b);
            let expected_r = to_biguint(&a) % to_biguint(&b);
            assert_eq!(q.as_slice(), from_biguint(&expected_q).as_slice());
            assert_eq!(r.as_slice(), from_biguint(&expected_r).as_slice());
        }
    }
}


mod dispatch {
    use super::*;

    #[test]
    fn both_paths_agree() {
        let a = pseudo_random_digits(1, 120);
        let b = pseudo_random_digits(2, 50);

        let always_recursive = Context::default().with_division_threshold(1);
        let never_recursive = Context::default().with_division_threshold(usize::MAX);

        let x = divide(&a, &b, &always_recursive).unwrap();
        let y = divide(&a, &b, &never_recursive).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn division_by_zero() {
        let ctx = Context::default();
        assert_eq!(divide(&[5], &[0], &ctx), Err(Error::DivisionByZero));
        assert!(divide_signed(Sign::Positive, &[5], Sign::Zero, &[0], &ctx).is_err());
    }

    macro_rules! impl_case {
        ($name:ident: $sa:ident $a:literal / $sb:ident $b:literal => $sq:ident $q:literal, $sr:ident $r:literal) => {
            #[test]
            fn $name() {
                let ctx = Context::default();
                let ((sq, q), (sr, r)) = divide_signed(Sign::$sa, &[$a], Sign::$sb, &[$b], &ctx).unwrap();
                assert_eq!((sq, q.as_slice()), (Sign::$sq, &[$q][..]));
                assert_eq!((sr, r.as_slice()), (Sign::$sr, &[$r][..]));
            }
        };
    }

    impl_case!(case_p7_p2: Positive 7 / Positive 2 => Positive 3, Positive 1);
    impl_case!(case_n7_p2: Negative 7 / Positive 2 => Negative 3, Negative 1);
    impl_case!(case_p7_n2: Positive 7 / Negative 2 => Negative 3, Positive 1);
    impl_case!(case_n7_n2: Negative 7 / Negative 2 => Positive 3, Negative 1);
    impl_case!(case_n6_p2: Negative 6 / Positive 2 => Negative 3, Zero 0);
    impl_case!(case_p1_n2: Positive 1 / Negative 2 => Zero 0, Positive 1);
    impl_case!(case_z0_n2: Zero 0 / Negative 2 => Zero 0, Zero 0);
}


mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig { cases: 200, ..Default::default() })]

        #[test]
        fn long_divide_matches_biguint(
            a in prop::collection::vec(any::<u64>(), 1..40),
            b in prop::collection::vec(any::<u64>(), 1..12)
        ) {
            prop_assume!(b.iter().any(|&d| d != 0));

            let (q, r) = long_divide(&a, &b).unwrap();
            let expected_q = from_biguint(&(to_biguint(&a) / to_biguint(&b)));
            let expected_r = from_biguint(&(to_biguint(&a) % to_biguint(&b)));
            prop_assert_eq!(q.as_slice(), expected_q.as_slice());
            prop_assert_eq!(r.as_slice(), expected_r.as_slice());
        }

        #[test]
        fn divide_and_conquer_matches_long(
            a in prop::collection::vec(any::<u64>(), 1..160),
            b in prop::collection::vec(any::<u64>(), 17..60)
        ) {
            prop_assume!(b.iter().any(|&d| d != 0));

            let long = long_divide(&a, &b).unwrap();
            let recursive = divide_and_conquer_divide(&a, &b).unwrap();
            prop_assert_eq!(long, recursive);
        }
    }
}
