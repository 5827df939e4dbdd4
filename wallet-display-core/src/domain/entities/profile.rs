//! Account display profile
//!
//! Derived, never persisted view of an account for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::emoji::address_hashed_color_index;
use crate::shared::types::{Address, ColorIndex};

/// Display identity of an account
///
/// `AccountProfile::default()` is the empty profile returned whenever the
/// account cannot be found; no field of it is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ens: Option<String>,
}

impl AccountProfile {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Account color, falling back to the palette slot hashed from the address
    pub fn avatar_color(&self) -> Option<ColorIndex> {
        self.color
            .or_else(|| self.address.as_deref().map(address_hashed_color_index))
    }
}
