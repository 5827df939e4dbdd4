//! Constants for the display core
//!
//! This module contains all constants used throughout the display core.

// Token list identifiers
pub const FAVORITES_LIST_ID: &str = "favorites";
pub const WATCHLIST_LIST_ID: &str = "watchlist";
pub const TRENDING_LIST_ID: &str = "trending";
pub const DEFI_LIST_ID: &str = "defi";
pub const STABLECOINS_LIST_ID: &str = "stablecoins";

/// Lists the "Add to List" sheet is allowed to mutate
pub const WRITABLE_LISTS: [&str; 2] = [WATCHLIST_LIST_ID, FAVORITES_LIST_ID];

// Address abbreviation
pub const ADDRESS_PREFIX_LEN: usize = 4;
pub const ADDRESS_SUFFIX_LEN: usize = 4;
pub const ADDRESS_SEPARATOR: &str = "...";

// Avatars
pub const AVATAR_PALETTE_SIZE: u32 = 7;

// Environment variables
pub const ENV_DEFAULT_NETWORK: &str = "WALLET_CORE_DEFAULT_NETWORK";
pub const ENV_ADDRESS_PREFIX_LEN: &str = "WALLET_CORE_ADDRESS_PREFIX_LEN";
pub const ENV_ADDRESS_SUFFIX_LEN: &str = "WALLET_CORE_ADDRESS_SUFFIX_LEN";

// FFI limits
pub const FFI_MAX_IDENTIFIER_LENGTH: usize = 128;
pub const FFI_MAX_PAYLOAD_LENGTH: usize = 1024 * 1024; // 1MB
