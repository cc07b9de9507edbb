//! Error types for the bank ledger.
//!
//! Declined transactions are not errors; they are reported as
//! [`TxOutcome::Declined`](crate::account::TxOutcome) values. The variants
//! here cover caller contract violations, referential-integrity failures,
//! and I/O.

use crate::account::AccountKind;
use crate::money::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operation.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Negative amount passed to a transaction or opening balance
    #[error("amount must be non-negative, got {amount}")]
    InvalidAmount { amount: Money },

    /// Opening balance below the kind-specific minimum
    #[error("opening balance {balance} is below the {minimum} minimum for a {kind} account")]
    BelowMinimumBalance {
        kind: AccountKind,
        minimum: Money,
        balance: Money,
    },

    /// An account or owner ID was registered twice
    #[error("duplicate {entity} ID {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    /// A link referenced an ID with no matching record
    #[error("{entity} ID {id} does not resolve to any record")]
    UnresolvedReference { entity: &'static str, id: u32 },

    /// A kind-gated operation was invoked on the wrong account kind
    #[error("{operation} is not supported for {kind} accounts")]
    UnsupportedOperation {
        kind: AccountKind,
        operation: &'static str,
    },

    /// A bootstrap record carried an unparseable creation timestamp
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// Missing input file arguments
    #[error("missing input files. Usage: bank-ledger <accounts.csv> <owners.csv> <links.csv>")]
    MissingArgument,
}
