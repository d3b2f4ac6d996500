// Test contents of bigdigit/radix.rs

use crate::bigdigit::{DIGIT_BASE, DIGIT_MAX};

#[test]
fn split_wide_digit_0() {
    let (hi, lo) = split_wide_digit(0);
    assert_eq!(hi, 0);
    assert_eq!(lo, 0);
}

#[test]
fn split_wide_digit_max_sqrd() {
    let max = DIGIT_MAX as u128;
    let (hi, lo) = split_wide_digit(max * max);
    assert_eq!(hi, 18446744073709551614);
    assert_eq!(lo, 1);
}

#[test]
fn split_and_join_123456789012345678901234567890123456789() {
    let n = 123456789012345678901234567890123456789u128;
    let (hi, lo) = split_wide_digit(n);
    assert_eq!(hi, 6692605942763486917);
    assert_eq!(lo, 12312739301371248917);
    assert_eq!(join_wide_digit(hi, lo), n);
}

#[test]
fn split_and_join_digit_base() {
    assert_eq!(split_wide_digit(DIGIT_BASE), (1, 0));
    assert_eq!(split_wide_digit(DIGIT_BASE - 1), (0, DIGIT_MAX));
    assert_eq!(join_wide_digit(1, 0), DIGIT_BASE);
    assert_eq!(join_wide_digit(DIGIT_MAX, DIGIT_MAX), AccumulatorType::MAX);
}

#[test]
fn expanding_add_boundaries() {
    assert_eq!(expanding_add(DIGIT_MAX, 0), (0, DIGIT_MAX));
    assert_eq!(expanding_add(DIGIT_MAX, 1), (1, 0));
    assert_eq!(expanding_add(DIGIT_MAX, DIGIT_MAX), (1, DIGIT_MAX - 1));
}

#[test]
fn add_carry_overflow() {
    let mut carry = 16;
    let sum = add_carry(DIGIT_MAX - 15, &mut carry);
    assert_eq!(sum, 0);
    assert_eq!(carry, 1);

    let mut carry = DIGIT_MAX;
    let sum = add_carry(DIGIT_MAX, &mut carry);
    assert_eq!(sum, DIGIT_MAX - 1);
    assert_eq!(carry, 1);
}

#[test]
fn addassign_carry_no_overflow() {
    let result = &mut 0;
    let mut carry = 40;
    addassign_carry(result, &mut carry);
    assert_eq!(*result, 40);
    assert_eq!(carry, 0);
}

#[test]
fn addassign_carry_overflow() {
    let mut result = DIGIT_MAX - 2;
    let mut carry = 5;
    addassign_carry(&mut result, &mut carry);
    assert_eq!(result, 2);
    assert_eq!(carry, 1);
}

#[test]
fn add_carry_into_slice_stops() {
    let result = &mut [0, 1, 2];
    let mut carry = 40;
    add_carry_into_slice(result, &mut carry);
    assert_eq!(result, &[40, 1, 2]);
    assert_eq!(carry, 0);
}

#[test]
fn add_carry_into_slice_ripples() {
    let result = &mut [DIGIT_MAX - 2, DIGIT_MAX, DIGIT_MAX - 1];
    let mut carry = 5;
    add_carry_into_slice(result, &mut carry);
    assert_eq!(result, &[2, 0, DIGIT_MAX]);
    assert_eq!(carry, 0);
}

#[test]
fn add_carry_into_slice_overflows() {
    let result = &mut [DIGIT_MAX, DIGIT_MAX];
    let mut carry = 1;
    add_carry_into_slice(result, &mut carry);
    assert_eq!(result, &[0, 0]);
    assert_eq!(carry, 1);
}

#[test]
fn add_with_carry_max() {
    let mut carry = 1;
    let sum = add_with_carry(DIGIT_MAX, DIGIT_MAX, &mut carry);
    assert_eq!(sum, DIGIT_MAX);
    assert_eq!(carry, 1);
}

#[test]
fn sub_with_borrow_wraps() {
    let mut borrow = true;
    let diff = sub_with_borrow(0, 0, &mut borrow);
    assert_eq!(diff, DIGIT_MAX);
    assert!(borrow);

    let diff = sub_with_borrow(10, 3, &mut borrow);
    assert_eq!(diff, 6);
    assert!(!borrow);
}

#[test]
fn carrying_mul_add_max() {
    let (hi, lo) = carrying_mul_add(DIGIT_MAX, DIGIT_MAX, DIGIT_MAX, DIGIT_MAX);
    assert_eq!(hi, DIGIT_MAX);
    assert_eq!(lo, DIGIT_MAX);

    let mut c = 5;
    let mut carry = 7;
    carrying_mul_add_inplace(3, 4, &mut c, &mut carry);
    assert_eq!(c, 24);
    assert_eq!(carry, 0);
}
