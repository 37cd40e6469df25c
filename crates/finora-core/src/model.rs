//! Account, user, transaction, and aggregate records.
//!
//! Field names on the wire follow the fixture documents: camelCase, except
//! `iso_currency_code` inside a balance snapshot.

use serde::{Deserialize, Serialize};

/// Balance snapshot of one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    /// Amount the holder can draw on right now.
    pub available: f64,
    /// Booked balance.
    pub current: f64,
    /// ISO 4217 currency code.
    pub iso_currency_code: String,
}

impl Balances {
    /// Whether the available amount differs from the booked balance.
    ///
    /// The dashboard only shows the available line in that case.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn shows_available(&self) -> bool {
        self.available != self.current
    }
}

/// A linked bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Trailing digits of the account number.
    pub mask: String,
    /// Category such as `depository` or `credit`.
    #[serde(rename = "type")]
    pub account_type: String,
    /// Refinement such as `checking`, `savings`, or `credit card`.
    pub subtype: String,
    pub balances: Balances,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// "First Last", as shown in the header.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booked transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Signed amount; negative for debits.
    pub amount: f64,
    /// Booking date, `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
    pub category: String,
}

/// Accounts plus the summary figures computed by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAggregate {
    pub accounts: Vec<Account>,
    /// Sum of the current balances of all accounts.
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
}

impl DashboardAggregate {
    /// Build an aggregate, deriving the total from the accounts' current balances.
    #[must_use]
    pub fn from_accounts(accounts: Vec<Account>, monthly_income: f64, monthly_expenses: f64) -> Self {
        let total_balance = accounts.iter().map(|a| a.balances.current).sum();
        Self {
            accounts,
            total_balance,
            monthly_income,
            monthly_expenses,
        }
    }

    /// No accounts are linked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_account(id: &str, account_type: &str, current: f64) -> Account {
    Account {
        id: id.to_string(),
        name: format!("Account {id}"),
        mask: "0000".to_string(),
        account_type: account_type.to_string(),
        subtype: "checking".to_string(),
        balances: Balances {
            available: current,
            current,
            iso_currency_code: "EUR".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_balance_sums_current_balances() {
        let accounts = vec![
            test_account("acc_1", "depository", 2540.75),
            test_account("acc_2", "depository", 15750.32),
            test_account("acc_3", "credit", -450.25),
        ];
        let aggregate = DashboardAggregate::from_accounts(accounts, 0.0, 0.0);
        assert!((aggregate.total_balance - 17840.82).abs() < 1e-6);
    }

    #[test]
    fn empty_aggregate_has_zero_total() {
        let aggregate = DashboardAggregate::from_accounts(Vec::new(), 0.0, 0.0);
        assert!(aggregate.is_empty());
        assert!(aggregate.total_balance.abs() < f64::EPSILON);
    }

    #[test]
    fn shows_available_only_when_different() {
        let mut balances = Balances {
            available: 100.0,
            current: 100.0,
            iso_currency_code: "EUR".into(),
        };
        assert!(!balances.shows_available());
        balances.available = 2000.0;
        assert!(balances.shows_available());
    }

    #[test]
    fn account_wire_format() {
        let account = test_account("acc_9", "credit", -1.5);
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "credit");
        assert_eq!(json["balances"]["iso_currency_code"], "EUR");
        assert!(json.get("account_type").is_none());
    }

    #[test]
    fn user_wire_format() {
        let json = r#"{"firstName":"Max","lastName":"Mustermann","email":"max@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Max Mustermann");
    }

    #[test]
    fn transaction_wire_format() {
        let json = r#"{"id":"tx_1","accountId":"acc_1","amount":-42.99,"date":"2023-11-15","name":"Amazon","category":"Shopping"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.account_id, "acc_1");
        assert!((tx.amount + 42.99).abs() < f64::EPSILON);
    }
}
