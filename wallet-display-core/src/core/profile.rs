//! Account display profile resolution
//!
//! This module derives the name, avatar symbol, color and image shown for a
//! wallet account. Resolution never fails: whenever the account cannot be
//! located the empty profile comes back so the caller can always render.

use crate::core::emoji::{
    address_hashed_emoji, first_emoji, first_grapheme, remove_first_emoji,
};
use crate::domain::entities::{AccountProfile, NameRegistry, Wallet};
use crate::shared::config::CoreConfig;
use crate::shared::constants::{ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN};
use crate::shared::types::Network;
use crate::shared::utils::{abbreviate_address, non_empty};

/// Resolves display profiles for wallet accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountProfileResolver {
    prefix_len: usize,
    suffix_len: usize,
}

impl Default for AccountProfileResolver {
    fn default() -> Self {
        Self {
            prefix_len: ADDRESS_PREFIX_LEN,
            suffix_len: ADDRESS_SUFFIX_LEN,
        }
    }
}

impl AccountProfileResolver {
    pub fn new(prefix_len: usize, suffix_len: usize) -> Self {
        Self { prefix_len, suffix_len }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.address_prefix_len, config.address_suffix_len)
    }

    /// Truncated form of an address used whenever no better name exists
    pub fn truncated_address(&self, address: &str) -> String {
        abbreviate_address(address, self.prefix_len, self.suffix_len)
    }

    /// Resolve the display profile of `address` within `wallet`
    pub fn resolve(
        &self,
        wallet: Option<&Wallet>,
        names: &NameRegistry,
        network: Network,
        address: Option<&str>,
    ) -> AccountProfile {
        let Some(wallet) = wallet else {
            return AccountProfile::default();
        };
        let Some(address) = non_empty(address) else {
            return AccountProfile::default();
        };
        if !wallet.has_accounts() {
            return AccountProfile::default();
        }
        let Some(account) = wallet.find_account(address) else {
            log::debug!("No account for {} in wallet", address);
            return AccountProfile::default();
        };

        let label = non_empty(account.label.as_deref());
        let ens = non_empty(names.get(address));

        let chosen = if network.is_mainnet() {
            label.or(ens)
        } else if label == ens {
            // A label equal to the registry name was copied from it, not set by the user
            None
        } else {
            label
        };

        let name = chosen
            .map(remove_first_emoji)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.truncated_address(address));

        let avatar = label
            .and_then(first_emoji)
            .unwrap_or_else(|| address_hashed_emoji(address));
        let symbol = first_grapheme(avatar).map(str::to_string);

        AccountProfile {
            address: Some(address.to_string()),
            name: Some(name),
            symbol,
            color: account.color,
            image: account.image.clone(),
            ens: ens.map(str::to_string),
        }
    }
}

/// Resolve a profile with the default address abbreviation
pub fn resolve_account_profile(
    wallet: Option<&Wallet>,
    names: &NameRegistry,
    network: Network,
    address: Option<&str>,
) -> AccountProfile {
    AccountProfileResolver::default().resolve(wallet, names, network, address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Account;
    use proptest::prelude::*;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";
    const OTHER: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn wallet_with(account: Account) -> Wallet {
        Wallet::new(vec![Account::new(OTHER).with_label("Other"), account])
    }

    fn registry(name: &str) -> NameRegistry {
        [(ADDRESS, name)].into_iter().collect()
    }

    fn resolve_on(wallet: &Wallet, names: &NameRegistry, network: Network) -> AccountProfile {
        resolve_account_profile(Some(wallet), names, network, Some(ADDRESS))
    }

    fn resolve_label(label: &str) -> AccountProfile {
        let wallet = wallet_with(Account::new(ADDRESS).with_label(label));
        resolve_on(&wallet, &NameRegistry::new(), Network::Mainnet)
    }

    #[test]
    fn test_missing_inputs_yield_empty_profile() {
        let wallet = wallet_with(Account::new(ADDRESS));
        let names = NameRegistry::new();
        let mainnet = Network::Mainnet;

        assert!(resolve_account_profile(None, &names, mainnet, Some(ADDRESS)).is_empty());
        assert!(resolve_account_profile(Some(&wallet), &names, mainnet, None).is_empty());
        assert!(resolve_account_profile(Some(&wallet), &names, mainnet, Some("")).is_empty());
        assert!(resolve_on(&Wallet::default(), &names, mainnet).is_empty());
    }

    #[test]
    fn test_unknown_address_yields_empty_profile() {
        let wallet = wallet_with(Account::new(ADDRESS).with_label("Main"));
        let names = registry("dave.eth");

        let profile = resolve_account_profile(
            Some(&wallet),
            &names,
            Network::Mainnet,
            Some("0x0000000000000000000000000000000000000001"),
        );
        assert_eq!(profile, AccountProfile::default());

        // Matching is exact, not case-insensitive
        let lowered = ADDRESS.to_lowercase();
        let profile =
            resolve_account_profile(Some(&wallet), &names, Network::Mainnet, Some(&lowered));
        assert!(profile.is_empty());
    }

    #[test]
    fn test_leading_emoji_becomes_symbol() {
        let profile = resolve_label("🔥Dave");

        assert_eq!(profile.name.as_deref(), Some("Dave"));
        assert_eq!(profile.symbol.as_deref(), Some("🔥"));

        let profile = resolve_label("🔥 Dave");
        assert_eq!(profile.name.as_deref(), Some("Dave"));
    }

    #[test]
    fn test_label_whitespace_is_kept() {
        let profile = resolve_label(" Savings ");
        assert_eq!(profile.name.as_deref(), Some(" Savings "));
        assert_eq!(profile.symbol.as_deref(), Some("🌲"));

        // Whitespace is a name, not a missing one
        let profile = resolve_label("   ");
        assert_eq!(profile.name.as_deref(), Some("   "));

        let wallet = wallet_with(Account::new(ADDRESS).with_label(" Savings "));
        let profile = resolve_on(&wallet, &registry("dave.eth"), Network::Rinkeby);
        assert_eq!(profile.name.as_deref(), Some(" Savings "));
    }

    #[test]
    fn test_text_style_symbol_stays_in_name() {
        let profile = resolve_label("©Corp");
        assert_eq!(profile.name.as_deref(), Some("©Corp"));
        assert_eq!(profile.symbol.as_deref(), Some("🌲"));

        let profile = resolve_label("©\u{FE0F}Corp");
        assert_eq!(profile.name.as_deref(), Some("Corp"));
        assert_eq!(profile.symbol.as_deref(), Some("©\u{FE0F}"));
    }

    #[test]
    fn test_mainnet_prefers_label_then_ens() {
        let labelled = wallet_with(Account::new(ADDRESS).with_label("Savings"));
        let profile = resolve_on(&labelled, &registry("dave.eth"), Network::Mainnet);
        assert_eq!(profile.name.as_deref(), Some("Savings"));
        assert_eq!(profile.ens.as_deref(), Some("dave.eth"));

        let unlabelled = wallet_with(Account::new(ADDRESS));
        let profile = resolve_on(&unlabelled, &registry("dave.eth"), Network::Mainnet);
        assert_eq!(profile.name.as_deref(), Some("dave.eth"));
    }

    #[test]
    fn test_no_label_no_ens_uses_truncated_address() {
        let wallet = wallet_with(Account::new(ADDRESS).with_label(""));
        for network in Network::ALL {
            let profile = resolve_on(&wallet, &NameRegistry::new(), network);
            assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));
            assert_eq!(profile.ens, None);
        }
    }

    #[test]
    fn test_short_address_is_still_abbreviated() {
        let wallet = Wallet::new(vec![Account::new("0x12345678")]);
        let profile = resolve_account_profile(
            Some(&wallet),
            &NameRegistry::new(),
            Network::Mainnet,
            Some("0x12345678"),
        );
        assert_eq!(profile.name.as_deref(), Some("0x12...5678"));
    }

    #[test]
    fn test_testnet_ignores_label_copied_from_ens() {
        let wallet = wallet_with(Account::new(ADDRESS).with_label("dave.eth"));
        let names = registry("dave.eth");

        let profile = resolve_on(&wallet, &names, Network::Rinkeby);
        assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));

        let profile = resolve_on(&wallet, &names, Network::Mainnet);
        assert_eq!(profile.name.as_deref(), Some("dave.eth"));
    }

    #[test]
    fn test_testnet_never_uses_ens_alone() {
        let wallet = wallet_with(Account::new(ADDRESS));
        let profile = resolve_on(&wallet, &registry("dave.eth"), Network::Goerli);
        assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));

        let wallet = wallet_with(Account::new(ADDRESS).with_label("Trading"));
        let profile = resolve_on(&wallet, &registry("dave.eth"), Network::Goerli);
        assert_eq!(profile.name.as_deref(), Some("Trading"));
    }

    #[test]
    fn test_emoji_only_label_falls_back_to_address() {
        let profile = resolve_label("👨‍👩‍👧");

        assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));
        assert_eq!(profile.symbol.as_deref(), Some("👨‍👩‍👧"));
    }

    #[test]
    fn test_label_without_emoji_uses_hashed_avatar() {
        let profile = resolve_label("Savings");

        assert_eq!(profile.symbol.as_deref(), Some(address_hashed_emoji(ADDRESS)));
        assert_eq!(profile.symbol.as_deref(), Some("🌲"));
    }

    #[test]
    fn test_emoji_comes_from_label_even_when_name_does_not() {
        let wallet = wallet_with(Account::new(ADDRESS).with_label("🦄dave.eth"));
        let profile = resolve_on(&wallet, &registry("🦄dave.eth"), Network::Kovan);

        assert_eq!(profile.name.as_deref(), Some("0x74...d8b6"));
        assert_eq!(profile.symbol.as_deref(), Some("🦄"));
    }

    #[test]
    fn test_color_and_image_pass_through() {
        let wallet = wallet_with(
            Account::new(ADDRESS)
                .with_label("Main")
                .with_color(4)
                .with_image("file:///avatars/main.png"),
        );
        let profile = resolve_on(&wallet, &NameRegistry::new(), Network::Mainnet);

        assert_eq!(profile.address.as_deref(), Some(ADDRESS));
        assert_eq!(profile.color, Some(4));
        assert_eq!(profile.image.as_deref(), Some("file:///avatars/main.png"));
    }

    #[test]
    fn test_configured_abbreviation() {
        let config = CoreConfig {
            address_prefix_len: 6,
            ..CoreConfig::default()
        };
        let resolver = AccountProfileResolver::from_config(&config);
        let wallet = wallet_with(Account::new(ADDRESS));

        let profile =
            resolver.resolve(Some(&wallet), &NameRegistry::new(), Network::Mainnet, Some(ADDRESS));
        assert_eq!(profile.name.as_deref(), Some("0x742d...d8b6"));
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(
            address in "0x[0-9a-fA-F]{40}",
            label in proptest::option::of("[a-z]{0,8}"),
        ) {
            let mut account = Account::new(address.clone());
            account.label = label;
            let wallet = Wallet::new(vec![account]);
            let names = NameRegistry::new();

            let first =
                resolve_account_profile(Some(&wallet), &names, Network::Mainnet, Some(&address));
            let second =
                resolve_account_profile(Some(&wallet), &names, Network::Mainnet, Some(&address));
            prop_assert_eq!(&first, &second);
            prop_assert!(first.symbol.is_some());
            prop_assert!(first.name.is_some());
        }

        #[test]
        fn unmatched_address_is_always_empty(address in "0x[0-9a-f]{40}") {
            let wallet = Wallet::new(vec![Account::new(ADDRESS).with_label("🔥Dave")]);
            let names = registry("dave.eth");
            let profile =
                resolve_account_profile(Some(&wallet), &names, Network::Mainnet, Some(&address));
            prop_assert!(profile.is_empty());
        }
    }
}
