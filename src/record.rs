//! Flat bootstrap and serialization records.
//!
//! The record layout is fixed: accounts travel as
//! `id,balance_cents,created_at,kind`, owners as
//! `id,last_name,first_name,street1,city,state`, and associations as
//! `account_id,owner_id`. Account records round-trip: the row emitted at
//! shutdown reloads into an equivalent account (variant counters reset to
//! their defaults).

use crate::account::{Account, AccountKind};
use crate::error::{LedgerError, Result};
use crate::money::Money;
use crate::owner::{Address, Owner, OwnerName};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Raw account bootstrap record as read from CSV.
///
/// The balance travels in integer cents. `created_at` is an RFC 3339
/// timestamp. Unrecognized kind labels open as basic accounts.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    /// Account ID
    pub id: u32,

    /// Opening balance in cents
    pub balance_cents: i64,

    /// Creation timestamp, RFC 3339
    pub created_at: String,

    /// Kind label: basic, savings, checking, money market
    pub kind: String,
}

impl AccountRecord {
    /// Opens an account from this record.
    ///
    /// Fails on an unparseable timestamp or when the opening balance
    /// violates the kind's construction rules.
    pub fn open(&self) -> Result<Account> {
        let created_at = DateTime::parse_from_rfc3339(self.created_at.trim())
            .map_err(|source| LedgerError::InvalidTimestamp {
                value: self.created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Account::open(
            self.id,
            AccountKind::from_label(&self.kind),
            Money::from_cents(self.balance_cents),
            created_at,
        )
    }

    /// Serializes an account back into its flat-record form.
    pub fn from_account(account: &Account) -> Self {
        AccountRecord {
            id: account.id(),
            balance_cents: account.balance().cents(),
            created_at: account
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            kind: account.kind().label().to_string(),
        }
    }
}

/// Raw owner bootstrap record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct OwnerRecord {
    /// Owner ID
    pub id: u32,

    pub last_name: String,
    pub first_name: String,
    pub street1: String,
    pub city: String,
    pub state: String,
}

impl OwnerRecord {
    /// Builds an owner from this record. Fields the flat layout does not
    /// carry (middle name, street2, country, zip) stay empty.
    pub fn to_owner(&self) -> Owner {
        Owner::new(
            self.id,
            OwnerName {
                first: self.first_name.clone(),
                middle: None,
                last: self.last_name.clone(),
            },
            Address {
                street1: self.street1.clone(),
                city: self.city.clone(),
                state: self.state.clone(),
                ..Address::default()
            },
        )
    }
}

/// Raw owner-account association record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct LinkRecord {
    pub account_id: u32,
    pub owner_id: u32,
}
