//! Token repository for read-only token lookup

use std::collections::HashSet;

use crate::domain::entities::network::ChainId;
use crate::domain::entities::token::Token;
use crate::shared::error::SdkError;
use crate::shared::types::SdkResult;

/// Token repository trait
pub trait TokenRepository {
    /// All tokens known on `chain_id`
    fn tokens_on(&self, chain_id: ChainId) -> Vec<&Token>;

    /// Find a token by chain and address (any casing)
    fn find(&self, chain_id: ChainId, address: &str) -> SdkResult<Option<&Token>>;

    /// Tokens on `chain_id` in canonical pair order (lowest address first).
    ///
    /// Fails with [`SdkError::IdenticalAddress`] if two tokens share an address,
    /// the same precondition [`Token::sorts_before`] enforces.
    fn sorted_tokens_on(&self, chain_id: ChainId) -> SdkResult<Vec<&Token>> {
        let mut tokens = self.tokens_on(chain_id);

        {
            let mut seen = HashSet::with_capacity(tokens.len());
            for token in tokens.iter().copied() {
                if !seen.insert(token.address()) {
                    return Err(SdkError::identical_address(token.address()));
                }
            }
        }

        tokens.sort_by_cached_key(|t| t.address().to_lowercase());
        Ok(tokens)
    }
}
