// 🏦 Account Registry - ordered in-memory collection of live accounts
//
// Creation order is preserved and otherwise not meaningful. Duplicate
// account numbers are permitted; find and delete resolve to the first
// match in order. The registry owns every account exclusively.

use crate::account::{Account, AccountKind};

pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Vec::new(),
        }
    }

    /// Append a new account. No duplicate-number check.
    pub fn create(&mut self, number: String, initial_balance: f64, kind: AccountKind) {
        self.accounts.push(Account::new(number, initial_balance, kind));
    }

    /// Remove the first account with the given number, in creation order.
    /// Returns whether a match was found.
    pub fn delete(&mut self, number: &str) -> bool {
        match self.accounts.iter().position(|a| a.number == number) {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    /// First account with the given number, in creation order.
    pub fn find(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// Mutable variant of `find`, used by deposit and withdraw.
    pub fn find_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number == number)
    }

    /// All live accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Count live accounts
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
