//! Configuration for the display core
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file, and fall back to safe defaults.

use std::env;

use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN, ENV_ADDRESS_PREFIX_LEN, ENV_ADDRESS_SUFFIX_LEN,
    ENV_DEFAULT_NETWORK,
};
use crate::shared::error::WalletError;
use crate::shared::types::Network;

/// Display core configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    pub default_network: Network,
    pub address_prefix_len: usize,
    pub address_suffix_len: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_network: Network::Mainnet,
            address_prefix_len: ADDRESS_PREFIX_LEN,
            address_suffix_len: ADDRESS_SUFFIX_LEN,
        }
    }
}

impl CoreConfig {
    /// Load configuration from .env or safe defaults
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv().ok(); // Load .env if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_network = match lookup(ENV_DEFAULT_NETWORK) {
            Some(value) => value
                .parse::<Network>()
                .map_err(|e| WalletError::config(format!("{}: {}", ENV_DEFAULT_NETWORK, e)))?,
            None => defaults.default_network,
        };

        let address_prefix_len = match lookup(ENV_ADDRESS_PREFIX_LEN) {
            Some(value) => value.trim().parse::<usize>()?,
            None => defaults.address_prefix_len,
        };
        let address_suffix_len = match lookup(ENV_ADDRESS_SUFFIX_LEN) {
            Some(value) => value.trim().parse::<usize>()?,
            None => defaults.address_suffix_len,
        };

        let config = Self {
            default_network,
            address_prefix_len,
            address_suffix_len,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        if self.address_prefix_len == 0 || self.address_suffix_len == 0 {
            return Err(WalletError::config("Address abbreviation lengths must be positive"));
        }
        Ok(())
    }
}
