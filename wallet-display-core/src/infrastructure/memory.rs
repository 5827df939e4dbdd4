//! In-memory collaborators
//!
//! Reference implementations of the list store and feedback seams for hosts
//! that keep lists in memory, and for tests.

use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{TokenItem, UserLists};
use crate::domain::repositories::{FeedbackNotifier, ListStore};
use crate::shared::constants::FAVORITES_LIST_ID;
use crate::shared::error::WalletError;
use crate::shared::types::Network;
use crate::shared::utils::addresses_equal;

/// List store holding a single `UserLists` snapshot behind a mutex
#[derive(Debug, Default)]
pub struct MemoryListStore {
    lists: Mutex<UserLists>,
}

impl MemoryListStore {
    /// Empty lists for every catalog entry of `network`
    pub fn for_network(network: Network) -> Self {
        Self::from_snapshot(UserLists::for_network(network))
    }

    pub fn from_snapshot(lists: UserLists) -> Self {
        Self {
            lists: Mutex::new(lists),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        let lists: UserLists = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(lists))
    }

    pub fn to_json(&self) -> Result<String, WalletError> {
        Ok(serde_json::to_string(&*self.lock()?)?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, UserLists>, WalletError> {
        self.lists
            .lock()
            .map_err(|_| WalletError::internal("List store lock poisoned"))
    }
}

impl ListStore for MemoryListStore {
    fn user_lists(&self) -> Result<UserLists, WalletError> {
        Ok(self.lock()?.clone())
    }

    fn update_list(
        &self,
        token_address: &str,
        list_id: &str,
        present: bool,
    ) -> Result<(), WalletError> {
        let mut lists = self.lock()?;

        if list_id == FAVORITES_LIST_ID {
            let favorites = &mut lists.favorites;
            if present {
                if !favorites.iter().any(|t| addresses_equal(&t.address, token_address)) {
                    favorites.push(TokenItem::from_address(token_address));
                }
            } else {
                favorites.retain(|t| !addresses_equal(&t.address, token_address));
            }
            return Ok(());
        }

        let list = lists
            .list_mut(list_id)
            .ok_or_else(|| WalletError::storage(format!("Unknown list: {}", list_id)))?;
        if present {
            if !list.contains(token_address) {
                list.tokens.push(token_address.to_string());
            }
        } else {
            list.tokens.retain(|t| !addresses_equal(t, token_address));
        }
        Ok(())
    }
}

/// Feedback notifier that only records the signal in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl FeedbackNotifier for LogFeedback {
    fn notify_success(&self) {
        log::debug!("Success feedback");
    }
}
