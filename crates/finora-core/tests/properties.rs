//! Property-based tests for grouping and currency formatting.

use proptest::prelude::*;

use finora_core::currency::format_currency;
use finora_core::grouping::group_by_type;
use finora_core::model::{Account, Balances};

/// No-break space and euro sign closing every EUR amount.
const EURO_SUFFIX: &str = "\u{a0}€";

fn account(index: usize, account_type: &str) -> Account {
    Account {
        id: format!("acc_{index}"),
        name: format!("Konto {index}"),
        mask: format!("{index:04}"),
        account_type: account_type.to_string(),
        subtype: "checking".to_string(),
        balances: Balances {
            available: 0.0,
            current: 0.0,
            iso_currency_code: "EUR".to_string(),
        },
    }
}

fn accounts_from(types: &[&str]) -> Vec<Account> {
    types
        .iter()
        .enumerate()
        .map(|(i, t)| account(i, t))
        .collect()
}

fn type_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("depository"),
        Just("credit"),
        Just("loan"),
        Just("investment"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every account lands in exactly one group, under its own type.
    #[test]
    fn grouping_is_a_partition(types in prop::collection::vec(type_strategy(), 0..24)) {
        let accounts = accounts_from(&types);
        let groups = group_by_type(&accounts);

        prop_assert_eq!(groups.account_count(), accounts.len());
        for group in &groups {
            prop_assert!(!group.accounts.is_empty());
            for a in &group.accounts {
                prop_assert_eq!(&a.account_type, &group.account_type);
            }
        }
        let mut ids: Vec<_> = groups.iter().flat_map(|g| g.accounts.iter().map(|a| a.id.clone())).collect();
        ids.sort();
        let mut expected: Vec<_> = accounts.iter().map(|a| a.id.clone()).collect();
        expected.sort();
        prop_assert_eq!(ids, expected);
    }

    /// Groups appear in first-occurrence order and keep input order inside.
    #[test]
    fn grouping_preserves_order(types in prop::collection::vec(type_strategy(), 0..24)) {
        let accounts = accounts_from(&types);
        let groups = group_by_type(&accounts);

        let mut first_seen: Vec<&str> = Vec::new();
        for t in &types {
            if !first_seen.contains(t) {
                first_seen.push(*t);
            }
        }
        let keys: Vec<&str> = groups.types().collect();
        prop_assert_eq!(keys, first_seen);

        for group in &groups {
            let expected: Vec<&Account> = accounts
                .iter()
                .filter(|a| a.account_type == group.account_type)
                .collect();
            let actual: Vec<&Account> = group.accounts.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Same input, same output.
    #[test]
    fn formatting_is_deterministic(amount in -1.0e9f64..1.0e9, code in prop_oneof![Just("EUR"), Just("USD"), Just("JPY"), Just("CHF")]) {
        let first = format_currency(amount, Some(code)).unwrap();
        let second = format_currency(amount, Some(code)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Grouped integer digits never contain a run longer than three.
    #[test]
    fn thousands_are_grouped(amount in 0.0f64..1.0e12) {
        let formatted = format_currency(amount, Some("EUR")).unwrap();
        let integer = formatted.split(',').next().unwrap();
        for part in integer.split('.') {
            prop_assert!(part.len() <= 3, "ungrouped run in {}", formatted);
        }
        prop_assert!(formatted.ends_with(EURO_SUFFIX), "missing suffix in {}", formatted);
    }

    /// Negating an amount only adds the leading minus sign.
    #[test]
    fn negation_only_adds_sign(amount in 0.0f64..1.0e9) {
        let positive = format_currency(amount, Some("EUR")).unwrap();
        let negative = format_currency(-amount, Some("EUR")).unwrap();
        prop_assert_eq!(negative, format!("-{positive}"));
    }
}

#[test]
fn first_occurrence_key_order() {
    let groups = group_by_type(&accounts_from(&["credit", "depository", "depository"]));
    assert_eq!(groups.types().collect::<Vec<_>>(), ["credit", "depository"]);
}

#[test]
fn german_grouping_and_symbol() {
    let formatted = format_currency(2540.75, Some("EUR")).unwrap();
    assert!(formatted.contains("2.540,75"));
    assert!(formatted.contains('€'));
}
