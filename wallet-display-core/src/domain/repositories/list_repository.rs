//! List store repository
//!
//! The store owns the user's token lists. The display core only reads
//! snapshots from it and requests single add/remove mutations.

use crate::domain::entities::UserLists;
use crate::shared::error::WalletError;

/// Token list store trait
///
/// A single `update_list` call must be atomic; the display core does not
/// coordinate concurrent callers.
#[cfg_attr(test, mockall::automock)]
pub trait ListStore {
    /// Current favorites and named lists
    fn user_lists(&self) -> Result<UserLists, WalletError>;

    /// Add (`present = true`) or remove (`present = false`) a token address
    fn update_list(
        &self,
        token_address: &str,
        list_id: &str,
        present: bool,
    ) -> Result<(), WalletError>;
}

impl<T: ListStore + ?Sized> ListStore for &T {
    fn user_lists(&self) -> Result<UserLists, WalletError> {
        (**self).user_lists()
    }

    fn update_list(
        &self,
        token_address: &str,
        list_id: &str,
        present: bool,
    ) -> Result<(), WalletError> {
        (**self).update_list(token_address, list_id, present)
    }
}
