use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::WalletError;

// Basic types for display operations
pub type Address = String;
pub type ListId = String;
pub type ColorIndex = u32;

// Network types - Ethereum mainnet and the public test networks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Ropsten,
    Kovan,
    Rinkeby,
    Goerli,
}

impl Network {
    pub const ALL: [Network; 5] = [
        Network::Mainnet,
        Network::Ropsten,
        Network::Kovan,
        Network::Rinkeby,
        Network::Goerli,
    ];

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Ropsten => 3,
            Network::Rinkeby => 4,
            Network::Goerli => 5,
            Network::Kovan => 42,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Result<Self, WalletError> {
        Self::ALL
            .into_iter()
            .find(|network| network.chain_id() == chain_id)
            .ok_or_else(|| WalletError::validation(format!("Unsupported chain id: {}", chain_id)))
    }

    /// Identifier used in configuration and serialized payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Ropsten => "ropsten",
            Network::Kovan => "kovan",
            Network::Rinkeby => "rinkeby",
            Network::Goerli => "goerli",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum Mainnet",
            Network::Ropsten => "Ropsten",
            Network::Kovan => "Kovan",
            Network::Rinkeby => "Rinkeby",
            Network::Goerli => "Goerli",
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|network| network.as_str() == value)
            .ok_or_else(|| WalletError::validation(format!("Unknown network: {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        let mainnet: Network = "mainnet".parse().expect("Failed to parse mainnet");
        assert_eq!(mainnet, Network::Mainnet);
        let rinkeby: Network = " Rinkeby ".parse().expect("Failed to parse rinkeby");
        assert_eq!(rinkeby, Network::Rinkeby);
        assert!("sepolia".parse::<Network>().is_err());
    }

    #[test]
    fn test_chain_ids() {
        for network in Network::ALL {
            let parsed = Network::from_chain_id(network.chain_id())
                .expect("Failed to map chain id back to network");
            assert_eq!(parsed, network);
        }
        assert!(Network::from_chain_id(137).is_err());
    }

    #[test]
    fn test_network_serde() {
        let json = serde_json::to_string(&Network::Goerli).expect("Failed to serialize network");
        assert_eq!(json, "\"goerli\"");
        let network: Network =
            serde_json::from_str("\"kovan\"").expect("Failed to deserialize network");
        assert_eq!(network, Network::Kovan);
        assert!(!network.is_mainnet());
    }
}
