//! Error handling for the swap SDK core
//! 
//! This module defines the error types used throughout the SDK core.

use thiserror::Error;

use crate::domain::entities::network::ChainId;

/// SDK error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Mismatched chains: {left} and {right}")]
    MismatchedChain { left: ChainId, right: ChainId },

    #[error("Identical addresses: {0}")]
    IdenticalAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl SdkError {
    /// Create an invalid address error
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress(message.into())
    }

    /// Create a mismatched chain error
    pub fn mismatched_chain(left: ChainId, right: ChainId) -> Self {
        Self::MismatchedChain { left, right }
    }

    /// Create an identical address error
    pub fn identical_address(address: impl Into<String>) -> Self {
        Self::IdenticalAddress(address.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<std::io::Error> for SdkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
