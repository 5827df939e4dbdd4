//! Core display functionality
//!
//! This module contains the logic of the display core: account profile
//! resolution, emoji handling for avatars, and token list membership.

pub mod emoji;
pub mod profile;
pub mod lists;

pub use profile::{resolve_account_profile, AccountProfileResolver};
pub use lists::{is_token_in_list, writable_lists, ListMembershipController, ListOption};
