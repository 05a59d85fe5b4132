//! Token entity for the swap SDK core
//! 
//! An ERC20 token identified by its chain and checksummed contract address.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::currency::BaseCurrency;
use super::network::ChainId;
use crate::shared::error::SdkError;
use crate::shared::types::{Address, Decimals, SdkResult};
use crate::shared::utils::validate_and_parse_address;

/// Represents an ERC20 token with a unique address and some metadata.
///
/// Identity is `(chain_id, address)`; the metadata fields do not take part in
/// equality or hashing. Tokens are immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "TokenRecord", try_from = "TokenRecord")]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: Decimals,
    symbol: Option<String>,
    name: Option<String>,
    project_link: Option<String>,
}

impl Token {
    /// Create a token, validating and checksumming `address`.
    ///
    /// Fails with [`SdkError::InvalidAddress`] when `address` is not a
    /// well-formed 20-byte hex address.
    pub fn new(
        chain_id: ChainId,
        address: &str,
        decimals: Decimals,
        symbol: Option<&str>,
        name: Option<&str>,
        project_link: Option<&str>,
    ) -> SdkResult<Self> {
        let address = validate_and_parse_address(address).map_err(|e| {
            log::debug!("Rejected token on {}: {}", chain_id, e);
            e
        })?;

        Ok(Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(str::to_string),
            name: name.map(str::to_string),
            project_link: project_link.map(str::to_string),
        })
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Checksummed contract address
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn project_link(&self) -> Option<&str> {
        self.project_link.as_deref()
    }

    /// Returns true if the two tokens are equivalent, i.e. have the same chain and address.
    pub fn equals(&self, other: &Token) -> bool {
        // short circuit on identity
        if std::ptr::eq(self, other) {
            return true;
        }
        self.chain_id == other.chain_id && self.address == other.address
    }

    /// Returns true if the address of this token sorts before the address of the other token.
    ///
    /// Fails with [`SdkError::MismatchedChain`] if the tokens are on different chains
    /// and with [`SdkError::IdenticalAddress`] if they share an address.
    pub fn sorts_before(&self, other: &Token) -> SdkResult<bool> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::mismatched_chain(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            return Err(SdkError::identical_address(self.address.clone()));
        }
        Ok(self.address.to_lowercase() < other.address.to_lowercase())
    }

    /// Order two tokens canonically, lower address first.
    pub fn sorted_pair<'a>(a: &'a Token, b: &'a Token) -> SdkResult<(&'a Token, &'a Token)> {
        if a.sorts_before(b)? {
            Ok((a, b))
        } else {
            Ok((b, a))
        }
    }
}

impl BaseCurrency for Token {
    fn decimals(&self) -> Decimals {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} ({}) on {}", symbol, self.address, self.chain_id),
            None => write!(f, "{} on {}", self.address, self.chain_id),
        }
    }
}

/// Wire form of a token, as found in token lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub chain_id: ChainId,
    pub address: String,
    pub decimals: Decimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
}

impl TryFrom<TokenRecord> for Token {
    type Error = SdkError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        Token::new(
            record.chain_id,
            &record.address,
            record.decimals,
            record.symbol.as_deref(),
            record.name.as_deref(),
            record.project_link.as_deref(),
        )
    }
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            chain_id: token.chain_id,
            address: token.address,
            decimals: token.decimals,
            symbol: token.symbol,
            name: token.name,
            project_link: token.project_link,
        }
    }
}
