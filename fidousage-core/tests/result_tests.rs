//! Integration tests for core result types.

use fidousage_core::{
    AccountRecord, Allowance, LineRecord, PhoneNumber, ResultSet, UsageCategory, UsageFigure,
    UsageMap,
};

#[test]
fn test_result_set_serialization_is_stable() {
    let build = || {
        let mut usage = UsageMap::new();
        usage.insert(UsageCategory::Mms, UsageFigure::from_raw(Some(3.0), Some(0.0), Some(3.0)));
        usage.insert(UsageCategory::Talk, UsageFigure::from_raw(None, Some(-1.0), Some(-1.0)));
        ResultSet::new(
            AccountRecord::new(0.0),
            vec![
                LineRecord::new(PhoneNumber::new("2"), 0.0, usage.clone()),
                LineRecord::new(PhoneNumber::new("1"), 5.0, usage),
            ],
        )
    };

    let a = serde_json::to_string(&build()).unwrap();
    let b = serde_json::to_string(&build()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_remaining_is_not_unlimited() {
    let figure = UsageFigure::from_raw(Some(3.0), Some(0.0), Some(3.0));
    assert_eq!(figure.remaining, Allowance::Amount(0.0));
}
