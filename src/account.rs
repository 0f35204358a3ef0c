// 💳 Account - a named balance record with a shared transaction rule
//
// Savings and checking accounts behave identically; the kind is only a
// label used in user-facing text. The non-negative-balance rule lives in
// `apply` and nowhere else: initial balances are accepted as-is, and
// deposit/withdraw amounts are not sign-checked, so a negative "deposit"
// acts as a withdrawal subject only to the resulting-balance check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Savings account
    Savings,

    /// Checking account
    Checking,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        }
    }

    /// Lowercase label used inside transaction status lines
    /// ("savings account", "checking account").
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
        }
    }

    /// Map the menu selector (1 = Savings, 2 = Checking) to a kind.
    /// Any other selector is invalid and no account gets created.
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            1 => Some(AccountKind::Savings),
            2 => Some(AccountKind::Checking),
            _ => None,
        }
    }
}

// ============================================================================
// TRANSACTION FAILURE
// ============================================================================

/// Rejection reason for a balance adjustment: the resulting balance
/// would have been negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientFunds;

impl std::fmt::Display for InsufficientFunds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Insufficient funds.")
    }
}

impl std::error::Error for InsufficientFunds {}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Caller-supplied account number. Uniqueness is intended but not
    /// enforced; lookups resolve to the first match in creation order.
    pub number: String,

    /// Current balance, in currency units.
    pub balance: f64,

    /// Savings or Checking. No behavioral effect beyond display text.
    pub kind: AccountKind,

    /// When the account was created.
    pub opened_at: DateTime<Utc>,

    /// Extensible metadata.
    pub metadata: serde_json::Value,
}

impl Account {
    /// Create a new account. The initial balance is accepted as-is,
    /// even when negative; the non-negative rule only guards
    /// transactions, not creation.
    pub fn new(number: String, balance: f64, kind: AccountKind) -> Self {
        Account {
            number,
            balance,
            kind,
            opened_at: Utc::now(),
            metadata: serde_json::json!({}),
        }
    }

    /// Apply a signed delta to the balance.
    ///
    /// Commits and returns the new balance when the result stays
    /// non-negative; otherwise the balance is left untouched.
    pub fn apply(&mut self, delta: f64) -> Result<f64, InsufficientFunds> {
        let candidate = self.balance + delta;
        if candidate >= 0.0 {
            self.balance = candidate;
            Ok(self.balance)
        } else {
            Err(InsufficientFunds)
        }
    }

    /// Deposit `amount`. The amount is not sign-checked: a negative
    /// deposit decreases the balance, subject to the same result check.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, InsufficientFunds> {
        self.apply(amount)
    }

    /// Withdraw `amount`. Same absence of a sign check as `deposit`.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, InsufficientFunds> {
        self.apply(-amount)
    }
}

// ============================================================================
// TESTS
// ============================================================================
