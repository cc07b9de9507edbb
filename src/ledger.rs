//! Batch ledger lifecycle over a [`Directory`].
//!
//! Streams the three bootstrap CSVs (accounts, owners, associations),
//! runs the monthly cycle, and serializes final account states. Malformed
//! rows are logged at warn level and skipped; duplicate IDs and
//! unresolved links are referential-integrity violations and abort the
//! load.
//!
//! # Output Ordering
//!
//! Final account states are written sorted by account ID in ascending
//! order to ensure deterministic, reproducible output.

use crate::account::AccountKind;
use crate::directory::Directory;
use crate::error::Result;
use crate::record::{AccountRecord, LinkRecord, OwnerRecord};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::io::{Read, Write};

/// The batch ledger facade.
///
/// Owns the [`Directory`] and drives bootstrap loading, the monthly
/// cycle, and shutdown serialization. Individual transactions go through
/// the directory's accounts directly.
#[derive(Debug, Default)]
pub struct Ledger {
    directory: Directory,
}

impl Ledger {
    /// Creates a ledger with an empty directory.
    pub fn new() -> Self {
        Ledger {
            directory: Directory::new(),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// Loads account bootstrap records from a CSV reader in streaming
    /// fashion.
    ///
    /// Rows that fail to parse or fail a construction rule are logged at
    /// warn level and skipped. A duplicate account ID aborts the load.
    pub fn load_accounts<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<AccountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.open() {
                    Ok(account) => {
                        let (id, kind) = (account.id(), account.kind());
                        self.directory.insert_account(account)?;
                        debug!("Row {}: Opened {} account {}", row_num, kind, id);
                    }
                    Err(e) => warn!("Row {}: {}", row_num, e),
                },
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Loads owner bootstrap records from a CSV reader.
    ///
    /// Malformed rows are logged and skipped; a duplicate owner ID aborts
    /// the load.
    pub fn load_owners<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<OwnerRecord>().enumerate() {
            let row_num = row_idx + 2;

            match result {
                Ok(record) => {
                    let owner = record.to_owner();
                    let id = owner.id();
                    self.directory.insert_owner(owner)?;
                    debug!("Row {}: Registered owner {}", row_num, id);
                }
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Loads owner-account association records from a CSV reader.
    ///
    /// Malformed rows are logged and skipped; a link naming an unknown
    /// account or owner aborts the load.
    pub fn load_links<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<LinkRecord>().enumerate() {
            let row_num = row_idx + 2;

            match result {
                Ok(record) => {
                    self.directory.link(record.account_id, record.owner_id)?;
                    debug!(
                        "Row {}: Linked account {} to owner {}",
                        row_num, record.account_id, record.owner_id
                    );
                }
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(())
    }

    /// Runs the monthly cycle over every account.
    ///
    /// Savings accounts accrue interest; checking accounts get their free
    /// checks back; money-market accounts accrue interest and get their
    /// transaction budget back. Basic accounts are untouched.
    pub fn run_monthly_cycle(&mut self, rate_percent: Decimal) {
        for account in self.directory.accounts_mut() {
            match account.kind() {
                AccountKind::Basic => {}
                AccountKind::Savings => {
                    // Safety: interest accrual is gated on the kind matched here
                    let interest = account
                        .add_interest(rate_percent)
                        .expect("savings accrues interest");
                    debug!("Account {}: accrued {} interest", account.id(), interest);
                }
                AccountKind::Checking => account.reset_checks(),
                AccountKind::MoneyMarket => {
                    // Safety: interest accrual is gated on the kind matched here
                    let interest = account
                        .add_interest(rate_percent)
                        .expect("money market accrues interest");
                    debug!("Account {}: accrued {} interest", account.id(), interest);
                    account.reset_transactions();
                }
            }
        }
    }

    /// Writes final account states to CSV.
    ///
    /// Output is sorted by account ID and round-trips with
    /// [`load_accounts`](Self::load_accounts).
    pub fn write_accounts<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "balance_cents", "created_at", "kind"])?;

        // Sort by account ID for deterministic output
        let mut accounts: Vec<_> = self.directory.accounts().collect();
        accounts.sort_by_key(|a| a.id());

        for account in accounts {
            let record = AccountRecord::from_account(account);
            csv_writer.write_record([
                record.id.to_string(),
                record.balance_cents.to_string(),
                record.created_at,
                record.kind,
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Renders a human-readable summary of an account and its owners.
    ///
    /// Returns `None` for an unknown account ID. Owner IDs that do not
    /// resolve are skipped.
    pub fn account_summary(&self, account_id: u32) -> Option<String> {
        let account = self.directory.account(account_id)?;
        let mut summary = account.to_string();

        for &owner_id in account.owner_ids() {
            if let Some(owner) = self.directory.owner(owner_id) {
                summary.push_str("\nOwned by ");
                summary.push_str(&owner.full_name());
            }
        }

        Some(summary)
    }
}
