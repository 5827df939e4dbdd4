//! Token list membership
//!
//! This module backs the "Add to List" sheet: it decides whether a token
//! already belongs to one of the user's lists and forwards add/remove
//! requests to the list store. Store failures are returned to the caller
//! untouched.

use serde::Serialize;

use crate::domain::entities::{
    default_token_lists, is_writable_list, ListDefinition, TokenItem, TokenList,
};
use crate::domain::repositories::{FeedbackNotifier, ListStore};
use crate::shared::constants::FAVORITES_LIST_ID;
use crate::shared::error::WalletError;
use crate::shared::types::Network;
use crate::shared::utils::addresses_equal;

/// Whether `token_address` belongs to the list `list_id`
///
/// Unknown lists contain nothing.
pub fn is_token_in_list(
    list_id: &str,
    token_address: &str,
    favorites: &[TokenItem],
    lists: &[TokenList],
) -> bool {
    if list_id == FAVORITES_LIST_ID {
        favorites
            .iter()
            .any(|token| addresses_equal(&token.address, token_address))
    } else {
        lists
            .iter()
            .find(|list| list.id == list_id)
            .is_some_and(|list| list.contains(token_address))
    }
}

/// Catalog lists of a network the sheet may mutate
pub fn writable_lists(network: Network) -> Vec<ListDefinition> {
    default_token_lists(network)
        .iter()
        .filter(|definition| definition.is_writable())
        .copied()
        .collect()
}

/// One row of the sheet: a writable list and whether the token is in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOption {
    pub list: ListDefinition,
    pub already_added: bool,
}

/// Membership controller over an external list store
pub struct ListMembershipController<S, F> {
    store: S,
    feedback: F,
}

impl<S: ListStore, F: FeedbackNotifier> ListMembershipController<S, F> {
    pub fn new(store: S, feedback: F) -> Self {
        Self { store, feedback }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Membership of `token` in `list_id` against the store's current snapshot
    pub fn is_member(&self, token: &TokenItem, list_id: &str) -> Result<bool, WalletError> {
        let snapshot = self.store.user_lists()?;
        Ok(is_token_in_list(list_id, &token.address, &snapshot.favorites, &snapshot.lists))
    }

    /// Rows for every writable list of `network`
    pub fn list_options(
        &self,
        token: &TokenItem,
        network: Network,
    ) -> Result<Vec<ListOption>, WalletError> {
        let snapshot = self.store.user_lists()?;
        Ok(writable_lists(network)
            .into_iter()
            .map(|list| {
                let already_added =
                    is_token_in_list(list.id, &token.address, &snapshot.favorites, &snapshot.lists);
                ListOption { list, already_added }
            })
            .collect())
    }

    /// Add `token` to `list_id` unless it is already there
    ///
    /// Returns `Ok(false)` without touching the store when the token is
    /// already a member.
    pub fn add_to_list(&self, token: &TokenItem, list_id: &str) -> Result<bool, WalletError> {
        ensure_writable(list_id)?;

        if self.is_member(token, list_id)? {
            log::debug!("{} already in {}", token.address, list_id);
            return Ok(false);
        }

        self.store.update_list(&token.address, list_id, true)?;
        self.feedback.notify_success();
        log::debug!("Added {} to {}", token.address, list_id);
        Ok(true)
    }

    /// Remove `token` from `list_id`, whether or not it is currently a member
    pub fn remove_from_list(&self, token: &TokenItem, list_id: &str) -> Result<(), WalletError> {
        ensure_writable(list_id)?;

        self.store.update_list(&token.address, list_id, false)?;
        self.feedback.notify_success();
        log::debug!("Removed {} from {}", token.address, list_id);
        Ok(())
    }
}

fn ensure_writable(list_id: &str) -> Result<(), WalletError> {
    if is_writable_list(list_id) {
        Ok(())
    } else {
        Err(WalletError::list_not_writable(list_id))
    }
}
