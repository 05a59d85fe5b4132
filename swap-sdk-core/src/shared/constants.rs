//! Constants for the swap SDK core
//! 
//! This module contains all constants used throughout the SDK core,
//! including the wrapped native currency data per chain.

use crate::domain::entities::network::ChainId;

// Address constants
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_HEX_LENGTH: usize = 40;
pub const ADDRESS_LENGTH: usize = 42; // 0x + 40 hex chars

// Native currency
pub const NATIVE_DECIMALS: u8 = 18;
pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_NAME: &str = "Ether";

// Configuration keys
pub const ENV_DEFAULT_CHAIN: &str = "SWAP_SDK_DEFAULT_CHAIN";
pub const ENV_TOKEN_LIST: &str = "SWAP_SDK_TOKEN_LIST";
pub const DEFAULT_CHAIN: ChainId = ChainId::Mainnet;

// Token configurations
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub chain_id: ChainId,
    pub address: &'static str,
    pub decimals: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub project_link: &'static str,
    pub enabled: bool,
}

// Wrapped native currency per chain. Enabling a chain is a data-only change.
pub static WRAPPED_NATIVE_CONFIGS: &[TokenConfig] = &[
    // The Mainnet entry carries WBNB metadata on the wASTR contract; kept as shipped.
    TokenConfig {
        chain_id: ChainId::Mainnet,
        address: "0xAeaaf0e2c81Af264101B9129C00F4440cCF0F720",
        decimals: 18,
        symbol: "WBNB",
        name: "Wrapped BNB",
        project_link: "https://www.binance.org",
        enabled: true,
    },
    TokenConfig {
        chain_id: ChainId::Bsc,
        address: "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
        decimals: 18,
        symbol: "WBNB",
        name: "Wrapped BNB",
        project_link: "https://www.binance.org",
        enabled: false,
    },
    TokenConfig {
        chain_id: ChainId::Testnet,
        address: "0xaE8E19eFB41e7b96815649A6a60785e1fbA84C1e",
        decimals: 18,
        symbol: "WBNB",
        name: "Wrapped BNB",
        project_link: "https://www.binance.org",
        enabled: false,
    },
    TokenConfig {
        chain_id: ChainId::Fantom,
        address: "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83",
        decimals: 18,
        symbol: "WFTM",
        name: "Wrapped FTM",
        project_link: "https://fantom.foundation",
        enabled: false,
    },
    TokenConfig {
        chain_id: ChainId::Harmony,
        address: "0xcf664087a5bb0237a0bad6742852ec6c8d69a27a",
        decimals: 18,
        symbol: "WONE",
        name: "Wrapped ONE",
        project_link: "https://harmony.one/",
        enabled: false,
    },
    TokenConfig {
        chain_id: ChainId::Shiden,
        address: "0xaE8E19eFB41e7b96815649A6a60785e1fbA84C1e",
        decimals: 18,
        symbol: "WSDN",
        name: "Wrapped SDN",
        project_link: "",
        enabled: false,
    },
    TokenConfig {
        chain_id: ChainId::Xdai,
        address: "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d",
        decimals: 18,
        symbol: "WXDAI",
        name: "Wrapped XDAI",
        project_link: "",
        enabled: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_constants() {
        assert_eq!(ADDRESS_LENGTH, ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH);
    }

    #[test]
    fn test_wrapped_native_configs() {
        let enabled: Vec<_> = WRAPPED_NATIVE_CONFIGS.iter().filter(|c| c.enabled).collect();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].chain_id, ChainId::Mainnet);
        assert_eq!(enabled[0].symbol, "WBNB");
    }

    #[test]
    fn test_one_config_per_chain() {
        for (i, a) in WRAPPED_NATIVE_CONFIGS.iter().enumerate() {
            for b in &WRAPPED_NATIVE_CONFIGS[i + 1..] {
                assert_ne!(a.chain_id, b.chain_id);
            }
        }
    }

    #[test]
    fn test_native_constants() {
        assert_eq!(NATIVE_DECIMALS, 18);
        assert_eq!(NATIVE_SYMBOL, "ETH");
    }
}
