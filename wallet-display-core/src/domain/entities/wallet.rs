//! Wallet entity and related value objects
//!
//! This module contains the Wallet entity as seen by the presentation layer:
//! a set of address-keyed accounts with optional user customization, plus
//! the read-only registry of names resolved for those addresses.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::shared::error::WalletError;
use crate::shared::types::{Address, ColorIndex};

/// One address-keyed entry within a wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: ColorIndex) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Wallet as handed to the display core
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Account>,
}

impl Wallet {
    pub fn new(addresses: Vec<Account>) -> Self {
        Self {
            addresses,
            ..Self::default()
        }
    }

    /// Find the account whose address matches exactly
    pub fn find_account(&self, address: &str) -> Option<&Account> {
        self.addresses.iter().find(|account| account.address == address)
    }

    pub fn has_accounts(&self) -> bool {
        !self.addresses.is_empty()
    }

    /// Check the account set at the boundary: addresses must be present and unique
    pub fn validate(&self) -> Result<(), WalletError> {
        let mut seen = HashSet::with_capacity(self.addresses.len());
        for account in &self.addresses {
            if account.address.is_empty() {
                return Err(WalletError::validation("Account address cannot be empty"));
            }
            if !seen.insert(account.address.as_str()) {
                return Err(WalletError::validation(format!(
                    "Duplicate account address: {}",
                    account.address
                )));
            }
        }
        Ok(())
    }
}

/// Address to human-readable name mapping (e.g. ENS reverse records)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRegistry {
    names: HashMap<Address, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: impl Into<Address>, name: impl Into<String>) {
        self.names.insert(address.into(), name.into());
    }

    /// Look up the name registered for an exact address key
    pub fn get(&self, address: &str) -> Option<&str> {
        self.names.get(address).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<A: Into<Address>, N: Into<String>> FromIterator<(A, N)> for NameRegistry {
    fn from_iter<I: IntoIterator<Item = (A, N)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(a, n)| (a.into(), n.into())).collect(),
        }
    }
}
