//! Static demo data served by [`crate::mock::MockProvider`].

use crate::model::{Account, Balances, Transaction, User};

/// The demo user.
#[must_use]
pub fn user() -> User {
    User {
        first_name: "Max".to_string(),
        last_name: "Mustermann".to_string(),
        email: "max.mustermann@example.com".to_string(),
    }
}

fn account(
    id: &str,
    name: &str,
    mask: &str,
    account_type: &str,
    subtype: &str,
    available: f64,
    current: f64,
) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        mask: mask.to_string(),
        account_type: account_type.to_string(),
        subtype: subtype.to_string(),
        balances: Balances {
            available,
            current,
            iso_currency_code: "EUR".to_string(),
        },
    }
}

/// Checking, savings, and a credit card.
#[must_use]
pub fn accounts() -> Vec<Account> {
    vec![
        account("acc_1", "Girokonto", "1234", "depository", "checking", 2540.75, 2540.75),
        account("acc_2", "Sparkonto", "5678", "depository", "savings", 15750.32, 15750.32),
        account("acc_3", "Kreditkarte", "9012", "credit", "credit card", 2000.0, -450.25),
    ]
}

fn transaction(id: &str, account_id: &str, amount: f64, date: &str, name: &str, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: account_id.to_string(),
        amount,
        date: date.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    }
}

/// Recent bookings on the demo accounts, newest first.
#[must_use]
pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("tx_1", "acc_1", -42.99, "2023-11-15", "Amazon", "Shopping"),
        transaction("tx_2", "acc_1", -65.30, "2023-11-14", "Supermarkt", "Groceries"),
        transaction("tx_3", "acc_1", 1250.00, "2023-11-01", "Gehalt", "Income"),
        transaction("tx_4", "acc_2", 500.00, "2023-11-02", "Überweisung Sparkonto", "Transfer"),
        transaction("tx_5", "acc_3", -89.99, "2023-11-10", "Restaurant", "Food & Drink"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn account_ids_are_unique() {
        let ids: HashSet<_> = accounts().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn transactions_reference_known_accounts() {
        let ids: HashSet<_> = accounts().into_iter().map(|a| a.id).collect();
        assert!(transactions().iter().all(|t| ids.contains(&t.account_id)));
    }
}
