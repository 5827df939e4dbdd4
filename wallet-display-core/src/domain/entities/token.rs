//! Token entities for the display core

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFI_LIST_ID, FAVORITES_LIST_ID, STABLECOINS_LIST_ID, TRENDING_LIST_ID, WATCHLIST_LIST_ID,
    WRITABLE_LISTS,
};
use crate::shared::types::{Address, ListId, Network};
use crate::shared::utils::addresses_equal;

/// Token as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenItem {
    pub address: Address,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

impl TokenItem {
    pub fn new(
        address: impl Into<Address>,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }

    pub fn from_address(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }
}

/// Named token list owned by the list store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenList {
    pub id: ListId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub tokens: Vec<Address>,
}

impl TokenList {
    pub fn contains(&self, address: &str) -> bool {
        self.tokens.iter().any(|token| addresses_equal(token, address))
    }
}

impl From<&ListDefinition> for TokenList {
    fn from(definition: &ListDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            emoji: definition.emoji.to_string(),
            tokens: Vec::new(),
        }
    }
}

/// Snapshot of everything the list store holds for the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLists {
    #[serde(default)]
    pub favorites: Vec<TokenItem>,
    #[serde(default)]
    pub lists: Vec<TokenList>,
}

impl UserLists {
    /// Empty favorites plus one empty list per catalog entry of the network
    pub fn for_network(network: Network) -> Self {
        Self {
            favorites: Vec::new(),
            lists: default_token_lists(network)
                .iter()
                .filter(|definition| definition.id != FAVORITES_LIST_ID)
                .map(TokenList::from)
                .collect(),
        }
    }

    pub fn list(&self, list_id: &str) -> Option<&TokenList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: &str) -> Option<&mut TokenList> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }
}

/// Catalog entry describing one of the default token lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

impl ListDefinition {
    pub fn is_writable(&self) -> bool {
        is_writable_list(self.id)
    }
}

const FAVORITES: ListDefinition = ListDefinition {
    id: FAVORITES_LIST_ID,
    name: "Favorites",
    emoji: "star",
};

const WATCHLIST: ListDefinition = ListDefinition {
    id: WATCHLIST_LIST_ID,
    name: "Watchlist",
    emoji: "eyes",
};

const MAINNET_LISTS: [ListDefinition; 5] = [
    FAVORITES,
    WATCHLIST,
    ListDefinition {
        id: TRENDING_LIST_ID,
        name: "Trending",
        emoji: "fire",
    },
    ListDefinition {
        id: DEFI_LIST_ID,
        name: "DeFi",
        emoji: "bank",
    },
    ListDefinition {
        id: STABLECOINS_LIST_ID,
        name: "Stablecoins",
        emoji: "dollar_banknote",
    },
];

const TESTNET_LISTS: [ListDefinition; 2] = [FAVORITES, WATCHLIST];

/// Default token list catalog for a network
pub fn default_token_lists(network: Network) -> &'static [ListDefinition] {
    match network {
        Network::Mainnet => &MAINNET_LISTS,
        Network::Ropsten | Network::Kovan | Network::Rinkeby | Network::Goerli => &TESTNET_LISTS,
    }
}

pub fn is_writable_list(list_id: &str) -> bool {
    WRITABLE_LISTS.contains(&list_id)
}
