//! JSON token lists
//! 
//! Loads a token list from disk. Every entry is validated and checksummed on
//! the way in; duplicate `(chain, address)` entries are rejected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::entities::network::ChainId;
use crate::domain::entities::token::Token;
use crate::domain::repositories::TokenRepository;
use crate::shared::error::SdkError;
use crate::shared::types::SdkResult;
use crate::shared::utils::validate_and_parse_address;

#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> SdkResult<Self> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(token) {
                return Err(SdkError::config(format!("Duplicate token in list: {}", token)));
            }
        }
        Ok(Self { tokens })
    }

    /// Parse a JSON array of tokens
    pub fn from_json(json: &str) -> SdkResult<Self> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        Self::new(tokens)
    }

    /// Load a JSON token list from `path`
    pub fn load(path: &Path) -> SdkResult<Self> {
        log::info!("Loading token list from {}", path.display());
        let json = fs::read_to_string(path)?;
        let list = Self::from_json(&json)?;
        log::info!("Loaded {} tokens", list.len());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenRepository for TokenList {
    fn tokens_on(&self, chain_id: ChainId) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.chain_id() == chain_id).collect()
    }

    fn find(&self, chain_id: ChainId, address: &str) -> SdkResult<Option<&Token>> {
        let address = validate_and_parse_address(address)?;
        Ok(self
            .tokens
            .iter()
            .find(|t| t.chain_id() == chain_id && t.address() == address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::currency::BaseCurrency;
    use std::io::Write;

    const LIST: &str = r#"[
        {"chainId": "mainnet", "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "decimals": 18, "symbol": "WETH"},
        {"chainId": "mainnet", "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "decimals": 18, "symbol": "DAI"},
        {"chainId": "mainnet", "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "decimals": 6, "symbol": "USDC"},
        {"chainId": "bsc", "address": "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", "decimals": 18, "symbol": "WBNB"}
    ]"#;

    #[test]
    fn test_from_json() {
        let list = TokenList::from_json(LIST).expect("Failed to parse token list");
        assert_eq!(list.len(), 4);
        assert_eq!(list.tokens_on(ChainId::Mainnet).len(), 3);
        assert_eq!(list.tokens_on(ChainId::Bsc).len(), 1);
        assert!(list.tokens_on(ChainId::Fantom).is_empty());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let list = TokenList::from_json(LIST).unwrap();
        let weth = list
            .find(ChainId::Mainnet, "0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2")
            .unwrap()
            .expect("WETH should be present");
        assert_eq!(weth.symbol(), Some("WETH"));

        assert!(list
            .find(ChainId::Bsc, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
            .unwrap()
            .is_none());
        assert!(matches!(list.find(ChainId::Bsc, "0x12"), Err(SdkError::InvalidAddress(_))));
    }

    #[test]
    fn test_sorted_tokens_on() {
        let list = TokenList::from_json(LIST).unwrap();
        let sorted = list.sorted_tokens_on(ChainId::Mainnet).unwrap();
        let symbols: Vec<_> = sorted.iter().filter_map(|t| t.symbol()).collect();
        assert_eq!(symbols, vec!["DAI", "USDC", "WETH"]);
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let json = r#"[
            {"chainId": "mainnet", "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "decimals": 18},
            {"chainId": "mainnet", "address": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "decimals": 18}
        ]"#;
        assert!(matches!(TokenList::from_json(json), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_invalid_entry_fails_whole_list() {
        let json = r#"[{"chainId": "mainnet", "address": "0xabc", "decimals": 18}]"#;
        assert!(matches!(TokenList::from_json(json), Err(SdkError::Serialization(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(LIST.as_bytes()).unwrap();

        let list = TokenList::load(file.path()).expect("Failed to load token list");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokenList::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SdkError::Io(_))));
    }
}
