//! Account owner identity and address records.

use std::fmt;

/// An owner's name. Middle name is optional; bootstrap records carry only
/// first and last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerName {
    pub first: String,
    pub middle: Option<String>,
    pub last: String,
}

/// A postal address. Only `street1`, `city`, and `state` are populated by
/// bootstrap records; the remaining fields exist for completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// An account owner.
///
/// Owners are created once from bootstrap data and are immutable except
/// for their account membership list, which is mutated only through
/// [`Directory::link`](crate::directory::Directory::link).
#[derive(Debug, Clone)]
pub struct Owner {
    id: u32,
    name: OwnerName,
    address: Address,
    account_ids: Vec<u32>,
}

impl Owner {
    /// Creates a new owner with no linked accounts.
    pub fn new(id: u32, name: OwnerName, address: Address) -> Self {
        Owner {
            id,
            name,
            address,
            account_ids: Vec::new(),
        }
    }

    /// Unique owner identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &OwnerName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// IDs of accounts linked to this owner, in link order. The same
    /// account ID may appear more than once if it was linked twice.
    pub fn account_ids(&self) -> &[u32] {
        &self.account_ids
    }

    /// Appends an account ID to the membership list. Duplicates are kept.
    pub(crate) fn add_account(&mut self, account_id: u32) {
        self.account_ids.push(account_id);
    }

    /// The owner's name on one line: first, optional middle, last.
    pub fn full_name(&self) -> String {
        match &self.name.middle {
            Some(middle) => format!("{} {} {}", self.name.first, middle, self.name.last),
            None => format!("{} {}", self.name.first, self.name.last),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.id, self.full_name())?;
        writeln!(f, "{}", self.address.street1)?;
        if let Some(street2) = &self.address.street2 {
            writeln!(f, "{}", street2)?;
        }
        write!(f, "{}, {}", self.address.city, self.address.state)?;
        if let Some(zip) = &self.address.zip {
            write!(f, " {}", zip)?;
        }
        if let Some(country) = &self.address.country {
            write!(f, " {}", country)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner::new(
            22,
            OwnerName {
                first: "Wanda".to_string(),
                middle: None,
                last: "Morales".to_string(),
            },
            Address {
                street1: "100 Pine St".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                ..Address::default()
            },
        )
    }

    #[test]
    fn test_new_owner_has_no_accounts() {
        let owner = owner();
        assert_eq!(owner.id(), 22);
        assert!(owner.account_ids().is_empty());
    }

    #[test]
    fn test_add_account_keeps_duplicates() {
        let mut owner = owner();
        owner.add_account(1212);
        owner.add_account(1213);
        owner.add_account(1212);

        assert_eq!(owner.account_ids(), &[1212, 1213, 1212]);
    }

    #[test]
    fn test_full_name_with_and_without_middle() {
        let mut owner = owner();
        assert_eq!(owner.full_name(), "Wanda Morales");

        owner.name.middle = Some("Q".to_string());
        assert_eq!(owner.full_name(), "Wanda Q Morales");
    }

    #[test]
    fn test_display_renders_name_and_address() {
        let rendered = owner().to_string();
        assert!(rendered.contains("22: Wanda Morales"));
        assert!(rendered.contains("100 Pine St"));
        assert!(rendered.contains("Portland, OR"));
    }
}
