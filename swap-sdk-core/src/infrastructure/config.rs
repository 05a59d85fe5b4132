//! SDK configuration from the environment
//! 
//! Values are read from the process environment after loading `.env` if present.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::domain::entities::network::ChainId;
use crate::shared::constants::{DEFAULT_CHAIN, ENV_DEFAULT_CHAIN, ENV_TOKEN_LIST};
use crate::shared::error::SdkError;
use crate::shared::types::{SdkResult, TokenListPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub default_chain: ChainId,
    pub token_list: Option<TokenListPath>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            default_chain: DEFAULT_CHAIN,
            token_list: None,
        }
    }
}

impl SdkConfig {
    /// Load configuration from .env and the process environment
    pub fn from_env() -> SdkResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_chain = match lookup(ENV_DEFAULT_CHAIN).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse::<ChainId>().map_err(|e| {
                SdkError::config(format!("{} is invalid: {}", ENV_DEFAULT_CHAIN, e))
            })?,
            None => DEFAULT_CHAIN,
        };

        let token_list = lookup(ENV_TOKEN_LIST)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            default_chain,
            token_list,
        };
        log::debug!("Loaded SDK configuration: {:?}", config);
        Ok(config)
    }
}
