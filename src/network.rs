use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::params::{self, NetworkParams};
use crate::Error;

/// Bitcoin networks the registry knows about. The set is closed: adding a
/// network is a code change, and every match over it stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BtcNetwork {
    Mainnet,
    Testnet,
}

impl BtcNetwork {
    /// Parameter bundle consumed by address/key-encoding routines.
    pub fn params(&self) -> &'static NetworkParams {
        params::network_params(*self)
    }

    /// Human-readable network label.
    pub fn label(&self) -> &'static str {
        match self {
            BtcNetwork::Mainnet => "Mainnet",
            BtcNetwork::Testnet => "Testnet",
        }
    }

    /// Determines the network an extended public key prefix implies
    /// (e.g. "xpub", "tpub"). Matching is case-insensitive; the error
    /// carries the caller's original spelling for display.
    pub fn from_xpub_prefix(prefix: &str) -> crate::Result<BtcNetwork> {
        match prefix.to_lowercase().as_str() {
            "xpub" | "ypub" | "zpub" => Ok(BtcNetwork::Mainnet),
            "tpub" | "upub" | "vpub" => Ok(BtcNetwork::Testnet),
            _ => Err(Error::UnrecognizedXpubPrefix(prefix.to_string()).into()),
        }
    }
}

impl FromStr for BtcNetwork {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> std::result::Result<BtcNetwork, Self::Err> {
        match input {
            crate::MAINNET => Ok(BtcNetwork::Mainnet),
            crate::TESTNET => Ok(BtcNetwork::Testnet),
            _ => Err(Error::UnknownNetwork(input.to_string()).into()),
        }
    }
}

impl fmt::Display for BtcNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network_str = match self {
            BtcNetwork::Mainnet => crate::MAINNET,
            BtcNetwork::Testnet => crate::TESTNET,
        };

        write!(f, "{}", network_str)
    }
}
