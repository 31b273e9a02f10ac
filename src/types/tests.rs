use super::Quantity;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_quantity_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("0.5", "0.5"),
        ("-0.5", "0.5"),
        ("  12.25  ", "12.25"),
        ("100", "100"),
        ("-100", "100"),
        ("0.00012345", "0.00012345"),
        ("1e-3", "0.001"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Quantity::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_quantity_fails_to_parse_invalid_strings() {
    assert!(Quantity::from_str("abc").is_err());
    assert!(Quantity::from_str("1.2.3").is_err());
    assert!(Quantity::from_str("").is_err());
    assert!(Quantity::from_str("   ").is_err());
}

#[test]
fn test_quantity_error_mentions_the_rejected_value() {
    let error = Quantity::from_str("abc").unwrap_err();

    assert!(error.to_string().contains("abc"));
}

#[test]
fn test_quantity_is_never_negative() -> Result<()> {
    let quantity = Quantity::new(Decimal::from_str("-42.1")?);

    assert_eq!(quantity.to_string(), "42.1");
    assert_eq!(quantity, Quantity::from_str("42.1")?);

    Ok(())
}
