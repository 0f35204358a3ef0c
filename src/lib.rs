// Bank Management System - Core Library
// Exposes the account model, registry, and session loop for the CLI and tests

pub mod account;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use account::{Account, AccountKind, InsufficientFunds};
pub use registry::AccountRegistry;
pub use session::{fmt_money, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
