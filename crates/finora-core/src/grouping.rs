//! Partition accounts by account type.

use crate::model::Account;

/// Accounts sharing one account type.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountGroup {
    pub account_type: String,
    pub accounts: Vec<Account>,
}

/// Ordered mapping from account type to the accounts of that type.
///
/// Groups appear in the order their type first occurs in the input; within
/// a group, accounts keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountGroups {
    groups: Vec<AccountGroup>,
}

impl AccountGroups {
    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AccountGroup> {
        self.groups.iter()
    }

    /// Account types in first-seen order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.account_type.as_str())
    }

    /// Accounts of the given type, if any.
    #[must_use]
    pub fn get(&self, account_type: &str) -> Option<&[Account]> {
        self.groups
            .iter()
            .find(|g| g.account_type == account_type)
            .map(|g| g.accounts.as_slice())
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of accounts across all groups.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.groups.iter().map(|g| g.accounts.len()).sum()
    }
}

impl IntoIterator for AccountGroups {
    type Item = AccountGroup;
    type IntoIter = std::vec::IntoIter<AccountGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a AccountGroups {
    type Item = &'a AccountGroup;
    type IntoIter = std::slice::Iter<'a, AccountGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group accounts by `account_type`.
///
/// Dashboards hold a handful of accounts, so the group lookup is a linear
/// scan over the types seen so far.
#[must_use]
pub fn group_by_type(accounts: &[Account]) -> AccountGroups {
    let mut groups: Vec<AccountGroup> = Vec::new();
    for account in accounts {
        match groups
            .iter_mut()
            .find(|g| g.account_type == account.account_type)
        {
            Some(group) => group.accounts.push(account.clone()),
            None => groups.push(AccountGroup {
                account_type: account.account_type.clone(),
                accounts: vec![account.clone()],
            }),
        }
    }
    AccountGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_account;

    #[test]
    fn empty_input_gives_empty_mapping() {
        let groups = group_by_type(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.account_count(), 0);
    }

    #[test]
    fn key_order_is_first_occurrence() {
        let accounts = vec![
            test_account("a", "credit", 1.0),
            test_account("b", "depository", 2.0),
            test_account("c", "depository", 3.0),
        ];
        let groups = group_by_type(&accounts);
        let types: Vec<_> = groups.types().collect();
        assert_eq!(types, ["credit", "depository"]);
    }

    #[test]
    fn in_group_order_is_input_order() {
        let accounts = vec![
            test_account("a", "depository", 1.0),
            test_account("b", "credit", 2.0),
            test_account("c", "depository", 3.0),
            test_account("d", "depository", 4.0),
        ];
        let groups = group_by_type(&accounts);
        let ids: Vec<_> = groups
            .get("depository")
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c", "d"]);
        assert_eq!(groups.get("credit").unwrap().len(), 1);
        assert!(groups.get("loan").is_none());
    }

    #[test]
    fn fixture_accounts_group_into_two() {
        let groups = group_by_type(&crate::fixtures::accounts());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.account_count(), 3);
        let types: Vec<_> = groups.iter().map(|g| g.account_type.clone()).collect();
        assert_eq!(types, ["depository", "credit"]);
    }

    #[test]
    fn owned_iteration_yields_groups() {
        let groups = group_by_type(&[test_account("a", "credit", 1.0)]);
        let owned: Vec<AccountGroup> = groups.into_iter().collect();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].accounts[0].id, "a");
    }
}
