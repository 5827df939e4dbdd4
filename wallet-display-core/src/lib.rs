//! Wallet Display Core
//!
//! Presentation-side core for the mobile wallet.
//! Derives how accounts are shown and manages token list membership, exposed
//! to the app through Rust and a C ABI.
//!
//! ## Architecture
//!
//! - **Core**: Account profile resolution, emoji avatars, list membership
//! - **Domain**: Entities and the seams to external collaborators
//! - **Infrastructure**: In-memory list store and logging feedback
//! - **Shared**: Common types, constants, configuration, and utilities
//!
//! ## Usage
//!
//! ```rust
//! use wallet_display_core::{
//!     resolve_account_profile, Account, ListMembershipController, LogFeedback,
//!     MemoryListStore, NameRegistry, Network, TokenItem, Wallet,
//! };
//!
//! let address = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
//! let wallet = Wallet::new(vec![Account::new(address).with_label("🔥Dave")]);
//!
//! let names = NameRegistry::new();
//! let profile = resolve_account_profile(Some(&wallet), &names, Network::Mainnet, Some(address));
//! assert_eq!(profile.name.as_deref(), Some("Dave"));
//! assert_eq!(profile.symbol.as_deref(), Some("🔥"));
//!
//! let store = MemoryListStore::for_network(Network::Mainnet);
//! let controller = ListMembershipController::new(&store, LogFeedback);
//! let dai = TokenItem::new("0x6B175474E89094C44Da98b954EedeAC495271d0F", "DAI", "Dai Stablecoin");
//! assert!(controller.add_to_list(&dai, "watchlist")?);
//! # Ok::<(), wallet_display_core::WalletError>(())
//! ```

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

// Re-export specific components
pub use crate::core::{
    is_token_in_list, resolve_account_profile, writable_lists, AccountProfileResolver,
    ListMembershipController, ListOption,
};
pub use crate::infrastructure::{LogFeedback, MemoryListStore};

// Re-export domain entities
pub use crate::domain::{
    Account, AccountProfile, FeedbackNotifier, ListDefinition, ListStore, NameRegistry, TokenItem,
    TokenList, UserLists, Wallet,
};

// Re-export shared types
pub use shared::config::CoreConfig;
pub use shared::error::WalletError;
pub use shared::types::Network;

/// Initialize logging
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() {
    if env_logger::try_init().is_ok() {
        log::info!("{} {} logging initialized", NAME, VERSION);
    }
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export FFI functions when feature is enabled
#[cfg(feature = "ffi")]
pub use ffi::*;

/// Initialize the display core with configuration from .env or safe defaults
pub fn init_display_core() -> Result<DisplayCore, WalletError> {
    init();
    let config = CoreConfig::from_env()?;
    log::info!(
        "Display core configured for {} ({}/{} address abbreviation)",
        config.default_network,
        config.address_prefix_len,
        config.address_suffix_len
    );
    Ok(DisplayCore::new(config))
}

/// Main display core struct that provides access to all functionality
#[derive(Debug, Clone)]
pub struct DisplayCore {
    pub config: CoreConfig,
    resolver: AccountProfileResolver,
}

impl DisplayCore {
    pub fn new(config: CoreConfig) -> Self {
        let resolver = AccountProfileResolver::from_config(&config);
        Self { config, resolver }
    }

    /// Resolve an account profile on the configured default network
    pub fn account_profile(
        &self,
        wallet: Option<&Wallet>,
        names: &NameRegistry,
        address: Option<&str>,
    ) -> AccountProfile {
        self.resolver
            .resolve(wallet, names, self.config.default_network, address)
    }

    /// Resolve an account profile on an explicit network
    pub fn account_profile_on(
        &self,
        wallet: Option<&Wallet>,
        names: &NameRegistry,
        network: Network,
        address: Option<&str>,
    ) -> AccountProfile {
        self.resolver.resolve(wallet, names, network, address)
    }

    /// Writable lists of the configured default network
    pub fn writable_lists(&self) -> Vec<ListDefinition> {
        writable_lists(self.config.default_network)
    }

    /// Controller for the given store and feedback collaborator
    pub fn list_controller<S: ListStore, F: FeedbackNotifier>(
        &self,
        store: S,
        feedback: F,
    ) -> ListMembershipController<S, F> {
        ListMembershipController::new(store, feedback)
    }
}

impl Default for DisplayCore {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn test_display_core_uses_configured_network() {
        let core = DisplayCore::new(CoreConfig {
            default_network: Network::Rinkeby,
            ..CoreConfig::default()
        });
        let address = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
        let wallet = Wallet::new(vec![Account::new(address).with_label("dave.eth")]);
        let names: NameRegistry = [(address, "dave.eth")].into_iter().collect();

        let profile = core.account_profile(Some(&wallet), &names, Some(address));
        assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));

        let profile =
            core.account_profile_on(Some(&wallet), &names, Network::Mainnet, Some(address));
        assert_eq!(profile.name.as_deref(), Some("dave.eth"));
    }

    #[test]
    fn test_display_core_list_controller() {
        let core = DisplayCore::default();
        assert_eq!(core.writable_lists().len(), 2);

        let store = MemoryListStore::for_network(core.config.default_network);
        let controller = core.list_controller(&store, LogFeedback);
        let token = TokenItem::from_address("eth");

        assert!(controller.add_to_list(&token, "favorites").expect("Failed to add"));
        let upper = TokenItem::from_address("ETH");
        assert!(controller.is_member(&upper, "favorites").expect("Failed to check"));
    }
}
