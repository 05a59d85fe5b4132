//! Chain identifiers known to the SDK

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SdkError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ChainId {
    Mainnet,
    Testnet,
    Bsc,
    Fantom,
    Harmony,
    Shiden,
    Xdai,
}

impl ChainId {
    pub const ALL: [ChainId; 7] = [
        ChainId::Mainnet,
        ChainId::Testnet,
        ChainId::Bsc,
        ChainId::Fantom,
        ChainId::Harmony,
        ChainId::Shiden,
        ChainId::Xdai,
    ];

    /// Numeric EIP-155 chain id
    pub fn id(&self) -> u64 {
        match self {
            ChainId::Mainnet => 592,
            ChainId::Testnet => 81,
            ChainId::Bsc => 56,
            ChainId::Fantom => 250,
            ChainId::Harmony => 1_666_600_000,
            ChainId::Shiden => 336,
            ChainId::Xdai => 100,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::Mainnet => "mainnet",
            ChainId::Testnet => "testnet",
            ChainId::Bsc => "bsc",
            ChainId::Fantom => "fantom",
            ChainId::Harmony => "harmony",
            ChainId::Shiden => "shiden",
            ChainId::Xdai => "xdai",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u64> for ChainId {
    type Error = SdkError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ChainId::ALL
            .iter()
            .copied()
            .find(|chain| chain.id() == id)
            .ok_or_else(|| SdkError::config(format!("Unknown chain id: {}", id)))
    }
}

/// Accepts either the chain name (`"bsc"`) or its numeric id (`"56"`).
impl FromStr for ChainId {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u64>() {
            return ChainId::try_from(id);
        }
        let lower = trimmed.to_lowercase();
        ChainId::ALL
            .iter()
            .copied()
            .find(|chain| chain.name() == lower)
            .ok_or_else(|| SdkError::config(format!("Unknown chain: {}", s)))
    }
}
