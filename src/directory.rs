//! ID-keyed registry for accounts and owners.
//!
//! The directory is an explicit value passed by reference to every
//! operation that needs lookup; there are no process-wide registries.
//! Insertion enforces ID uniqueness, so two records can never share an ID.

use crate::account::Account;
use crate::error::{LedgerError, Result};
use crate::owner::Owner;
use std::collections::HashMap;

/// Registry mapping IDs to accounts and owners.
#[derive(Debug, Default)]
pub struct Directory {
    accounts: HashMap<u32, Account>,
    owners: HashMap<u32, Owner>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Directory {
            accounts: HashMap::new(),
            owners: HashMap::new(),
        }
    }

    /// Registers an account, rejecting an already-used ID.
    pub fn insert_account(&mut self, account: Account) -> Result<()> {
        if self.accounts.contains_key(&account.id()) {
            return Err(LedgerError::DuplicateId {
                entity: "account",
                id: account.id(),
            });
        }
        self.accounts.insert(account.id(), account);
        Ok(())
    }

    /// Registers an owner, rejecting an already-used ID.
    pub fn insert_owner(&mut self, owner: Owner) -> Result<()> {
        if self.owners.contains_key(&owner.id()) {
            return Err(LedgerError::DuplicateId {
                entity: "owner",
                id: owner.id(),
            });
        }
        self.owners.insert(owner.id(), owner);
        Ok(())
    }

    /// Looks up an account. Absence is `None`, never a fault.
    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn account_mut(&mut self, id: u32) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Looks up an owner. Absence is `None`, never a fault.
    pub fn owner(&self, id: u32) -> Option<&Owner> {
        self.owners.get(&id)
    }

    pub fn owner_mut(&mut self, id: u32) -> Option<&mut Owner> {
        self.owners.get_mut(&id)
    }

    /// Iterates accounts in unspecified order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn accounts_mut(&mut self) -> impl Iterator<Item = &mut Account> {
        self.accounts.values_mut()
    }

    /// Iterates owners in unspecified order.
    pub fn owners(&self) -> impl Iterator<Item = &Owner> {
        self.owners.values()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    /// Associates an account and an owner, mutating both membership
    /// lists.
    ///
    /// Fails with `UnresolvedReference` naming the missing side if either
    /// ID is absent. Linking the same pair twice records it twice on both
    /// sides.
    pub fn link(&mut self, account_id: u32, owner_id: u32) -> Result<()> {
        if !self.accounts.contains_key(&account_id) {
            return Err(LedgerError::UnresolvedReference {
                entity: "account",
                id: account_id,
            });
        }
        if !self.owners.contains_key(&owner_id) {
            return Err(LedgerError::UnresolvedReference {
                entity: "owner",
                id: owner_id,
            });
        }

        // Safety: both sides were just verified above
        self.accounts
            .get_mut(&account_id)
            .expect("account exists")
            .add_owner(owner_id);
        self.owners
            .get_mut(&owner_id)
            .expect("owner exists")
            .add_account(account_id);

        Ok(())
    }
}
