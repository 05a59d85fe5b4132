//! Wrapped native currency registry
//! 
//! Process-wide, read-only mapping from chain to the token that wraps the
//! chain's native currency. Built once on first access from
//! [`WRAPPED_NATIVE_CONFIGS`].

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::domain::entities::network::ChainId;
use crate::domain::entities::token::Token;
use crate::shared::constants::{TokenConfig, WRAPPED_NATIVE_CONFIGS};
use crate::shared::types::SdkResult;

lazy_static! {
    pub static ref WETH: HashMap<ChainId, Token> = build_registry(WRAPPED_NATIVE_CONFIGS);
}

fn token_from_config(config: &TokenConfig) -> SdkResult<Token> {
    let project_link = Some(config.project_link).filter(|link| !link.is_empty());
    Token::new(
        config.chain_id,
        config.address,
        config.decimals,
        Some(config.symbol),
        Some(config.name),
        project_link,
    )
}

fn build_registry(configs: &[TokenConfig]) -> HashMap<ChainId, Token> {
    let mut registry = HashMap::new();
    for config in configs.iter().filter(|c| c.enabled) {
        match token_from_config(config) {
            Ok(token) => {
                log::debug!("Registered wrapped native token {}", token);
                registry.insert(config.chain_id, token);
            }
            Err(e) => log::error!("Skipping wrapped native entry for {}: {}", config.chain_id, e),
        }
    }
    registry
}

/// Wrapped native token for `chain_id`, if that chain is enabled
pub fn wrapped_native(chain_id: ChainId) -> Option<&'static Token> {
    WETH.get(&chain_id)
}
