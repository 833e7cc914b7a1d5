use chrono::NaiveDate;
use dinerocli::{Error, utils::*};
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_parse_voucher_date() {
    let date = parse_voucher_date("2024-01-01").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    // surrounding whitespace is tolerated
    let date = parse_voucher_date(" 2024-02-29 ").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
}

#[rstest]
#[case("")]
#[case("2024-1-01")]
#[case("2024-01-1")]
#[case("01-01-2024")]
#[case("2024/01/01")]
#[case("2024-02-30")]
#[case("2023-02-29")]
#[case("2024-13-01")]
#[case("20240101")]
#[case("2024-01-01T00:00:00")]
#[case("tomorrow")]
fn test_parse_voucher_date_rejects_malformed(#[case] input: &str) {
    match parse_voucher_date(input) {
        Err(Error::Config(message)) => assert!(message.contains("--voucher-date")),
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("1250.00").unwrap(), dec("1250.00"));
    assert_eq!(parse_amount("-3.5").unwrap(), dec("-3.5"));
    assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount(" 42 ").unwrap(), dec("42"));
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("1.2.3")]
fn test_parse_amount_rejects_garbage(#[case] input: &str) {
    match parse_amount(input) {
        Err(Error::Config(message)) => assert!(message.contains("--amount")),
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_parse_description() {
    assert_eq!(parse_description("Sample voucher").unwrap(), "Sample voucher");
    // free text is sent exactly as given
    assert_eq!(
        parse_description("  Rent, March  ").unwrap(),
        "  Rent, March  "
    );
    assert!(matches!(parse_description("   "), Err(Error::Config(_))));
    assert!(matches!(parse_description(""), Err(Error::Config(_))));
}

#[rstest]
#[case("1250.00", "-1250.00")]
#[case("0.01", "-0.01")]
#[case("0", "0")]
#[case("-0.01", "-0.01")]
#[case("-1250.00", "-1250.00")]
fn test_normalize_amount(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_amount(dec(input)), dec(expected));
}

#[test]
fn test_excerpt() {
    assert_eq!(excerpt("  "), "<empty body>");
    assert_eq!(excerpt("{\"error\":\"invalid\"}"), "{\"error\":\"invalid\"}");

    let long = "x".repeat(2_000);
    let short = excerpt(&long);
    assert!(short.len() < long.len());
    assert!(short.ends_with("..."));
}
