//! # Bank Ledger
//!
//! An in-memory retail bank ledger: owners, accounts (basic, savings,
//! checking, money-market), and the per-kind rules governing deposits and
//! withdrawals.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: balances are integer cents via [`Money`]
//! - **Declines are values**: rule failures return [`TxOutcome::Declined`],
//!   never an error
//! - **Closed kind dispatch**: one `Account` with a tagged-variant kind
//!   state instead of an inheritance hierarchy
//! - **Explicit registry**: the [`Directory`] is a value passed by
//!   reference, not a process-wide singleton
//! - **Deterministic output**: serialized accounts sorted by ID
//!
//! ## Example
//!
//! ```no_run
//! use bank_ledger::Ledger;
//! use std::io::Cursor;
//!
//! let accounts = "id,balance_cents,created_at,kind\n1,150000,2012-01-01T00:00:00Z,savings\n";
//! let mut ledger = Ledger::new();
//! ledger.load_accounts(Cursor::new(accounts)).unwrap();
//! ledger.write_accounts(std::io::stdout()).unwrap();
//! ```

pub mod account;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod money;
pub mod owner;
pub mod record;

pub use account::{Account, AccountKind, DeclineReason, TxOutcome};
pub use directory::Directory;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use money::{Money, ParseMoneyError};
pub use owner::{Address, Owner, OwnerName};
pub use record::{AccountRecord, LinkRecord, OwnerRecord};
