//! Integration tests for the binary arithmetic core

use num_bigint::BigUint;
use rstest::rstest;

use bincomp::domain::{add_binary, compute, validate, BinaryString, ValidationError};
use bincomp::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn bin(s: &str) -> BinaryString {
    validate(s).expect("valid binary")
}

// ============================================================
// Validation
// ============================================================

#[rstest]
#[case("")]
#[case("   ")]
fn given_blank_input_when_validating_then_empty_input(#[case] input: &str) {
    assert_eq!(validate(input).unwrap_err(), ValidationError::EmptyInput);
}

#[rstest]
#[case("102")]
#[case("abc")]
#[case("0b101")]
#[case("1.0")]
#[case("-1")]
fn given_foreign_characters_when_validating_then_invalid_character(#[case] input: &str) {
    assert!(matches!(
        validate(input),
        Err(ValidationError::InvalidCharacter { .. })
    ));
}

#[test]
fn given_validation_errors_when_displayed_then_user_messages() {
    assert_eq!(
        ValidationError::EmptyInput.to_string(),
        "Please enter a binary number"
    );
    assert_eq!(
        validate("12").unwrap_err().to_string(),
        "Invalid binary number! Please enter only 0s and 1s."
    );
}

// ============================================================
// Normalization, complements, addition, decimal
// ============================================================

#[rstest]
#[case("000101", "101")]
#[case("0", "0")]
#[case("1", "1")]
fn given_binary_when_normalizing_then_no_redundant_zeros(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(bin(input).normalize().as_str(), expected);
}

#[rstest]
#[case("0")]
#[case("1")]
#[case("000")]
#[case("1011001110001111")]
fn given_binary_when_ones_complement_twice_then_identity(#[case] input: &str) {
    let b = bin(input);
    assert_eq!(b.ones_complement().len(), b.len());
    assert_eq!(b.ones_complement().ones_complement(), b);
}

#[rstest]
#[case("0", "0", "0")]
#[case("1", "1", "10")]
#[case("111", "1", "1000")]
fn given_operands_when_adding_then_binary_sum(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
    assert_eq!(add_binary(&bin(a), &bin(b)).as_str(), expected);
}

#[rstest]
#[case("0", 0)]
#[case("1010", 10)]
#[case("1111", 15)]
fn given_binary_when_converting_then_decimal(#[case] input: &str, #[case] expected: u64) {
    assert_eq!(bin(input).to_decimal(), BigUint::from(expected));
}

#[test]
fn given_64_ones_when_converting_then_matches_u64_max() {
    let all_ones = "1".repeat(64);
    assert_eq!(bin(&all_ones).to_decimal(), BigUint::from(u64::MAX));
}

// ============================================================
// End-to-end compute
// ============================================================

#[test]
fn given_101_when_computing_then_complements_and_decimals() {
    let result = compute("101").unwrap();
    assert_eq!(result.normalized().as_str(), "101");
    assert_eq!(result.decimal(), &BigUint::from(5u32));
    assert_eq!(result.ones_complement().as_str(), "010");
    assert_eq!(result.ones_decimal(), &BigUint::from(2u32));
    assert_eq!(result.twos_complement().as_str(), "011");
    assert_eq!(result.twos_decimal(), &BigUint::from(3u32));
}

#[test]
fn given_0_when_computing_then_twos_complement_grows_one_bit() {
    let result = compute("0").unwrap();
    assert_eq!(result.normalized().as_str(), "0");
    assert_eq!(result.decimal(), &BigUint::from(0u32));
    assert_eq!(result.ones_complement().as_str(), "1");
    assert_eq!(result.ones_decimal(), &BigUint::from(1u32));
    assert_eq!(result.twos_complement().as_str(), "10");
    assert_eq!(result.twos_decimal(), &BigUint::from(2u32));
}

#[test]
fn given_leading_zeros_when_computing_then_normalized_first() {
    let result = compute("0010").unwrap();
    assert_eq!(result.normalized().as_str(), "10");
    assert_eq!(result.ones_complement().as_str(), "01");
    assert_eq!(result.twos_complement().as_str(), "10");
}

#[test]
fn given_surrounding_whitespace_when_computing_then_trimmed() {
    assert_eq!(compute("  1100 \n").unwrap(), compute("1100").unwrap());
}

#[rstest]
#[case("abc")]
#[case("")]
fn given_bad_input_when_computing_then_no_result(#[case] input: &str) {
    let err = compute(input).unwrap_err();
    match input {
        "" => assert_eq!(err, ValidationError::EmptyInput),
        _ => assert!(matches!(err, ValidationError::InvalidCharacter { found: 'a', position: 0 })),
    }
}

#[test]
fn given_any_width_when_computing_then_ones_plus_twos_relation_holds() {
    // ones + 1 == twos for every input, bit growth included
    for input in ["0", "1", "10", "111", "1000", "101010"] {
        let result = compute(input).unwrap();
        let ones_plus_one = result.ones_decimal().clone() + 1u32;
        assert_eq!(&ones_plus_one, result.twos_decimal(), "input {input}");
    }
}
