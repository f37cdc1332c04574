use crate::core::errors::LedgerError;
use crate::core::money::Money;

#[test]
fn test_parse_decimal_strings() {
    assert_eq!("41.6".parse::<Money>().unwrap(), Money::from_minor(4160));
    assert_eq!("41.60".parse::<Money>().unwrap(), Money::from_minor(4160));
    assert_eq!("124.80".parse::<Money>().unwrap(), Money::from_minor(12480));
    assert_eq!("-3".parse::<Money>().unwrap(), Money::from_minor(-300));
    assert_eq!("+0.05".parse::<Money>().unwrap(), Money::from_minor(5));
    assert_eq!(" 7.25 ".parse::<Money>().unwrap(), Money::from_minor(725));
}

#[test]
fn test_parse_rejects_malformed_values() {
    for input in ["", "abc", "1.234", ".50", "1.", "1,50", "--1", "1e3"] {
        assert_eq!(
            input.parse::<Money>(),
            Err(LedgerError::InvalidMoney(input.to_string())),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_display_pads_minor_units() {
    assert_eq!(Money::from_minor(4160).to_string(), "41.60");
    assert_eq!(Money::from_minor(5).to_string(), "0.05");
    assert_eq!(Money::from_minor(-3300).to_string(), "-33.00");
    assert_eq!(Money::ZERO.to_string(), "0.00");
}

#[test]
fn test_three_way_split_of_124_80_is_exact() {
    let share = Money::from_minor(4160);
    assert_eq!(share * 3, "124.80".parse().unwrap());
}

#[test]
fn test_json_uses_decimal_strings() {
    let value = serde_json::to_value(Money::from_minor(-1250)).unwrap();
    assert_eq!(value, serde_json::json!("-12.50"));

    let from_str: Money = serde_json::from_str("\"12.50\"").unwrap();
    assert_eq!(from_str, Money::from_minor(1250));

    assert!(serde_json::from_str::<Money>("\"12.505\"").is_err());
}

#[test]
fn test_json_rejects_bare_numbers() {
    assert!(serde_json::from_str::<Money>("35").is_err());
    assert!(serde_json::from_str::<Money>("35.5").is_err());
    assert_eq!(serde_json::from_str::<Money>("\"35\"").unwrap(), Money::from_minor(3500));
}

#[test]
fn test_checked_arithmetic_reports_overflow() {
    let max = Money::from_minor(i64::MAX);
    assert_eq!(max.checked_add(Money::from_minor(1)), Err(LedgerError::AmountOverflow));
    assert_eq!(
        Money::from_minor(i64::MIN).checked_sub(Money::from_minor(1)),
        Err(LedgerError::AmountOverflow)
    );
    assert_eq!(
        Money::checked_sum([max, max, Money::from_minor(4)]),
        Err(LedgerError::AmountOverflow)
    );
    assert_eq!(
        Money::checked_sum([Money::from_minor(150), Money::from_minor(-50)]),
        Ok(Money::from_minor(100))
    );
}

#[test]
fn test_sum_and_sign_helpers() {
    let total: Money = [Money::from_minor(100), Money::from_minor(-40), Money::from_minor(5)]
        .iter()
        .sum();
    assert_eq!(total, Money::from_minor(65));
    assert!(total.is_positive());
    assert!((-total).is_negative());
    assert_eq!((-total).abs(), total);
    assert_eq!(total.min(Money::from_minor(10)), Money::from_minor(10));
}
