//! Swap SDK Core
//! 
//! Token entities for the swap SDK.
//! 
//! ## Architecture
//! 
//! - **Domain**: Currencies, tokens, chains and the wrapped native registry
//! - **Infrastructure**: Environment configuration and JSON token lists
//! - **Shared**: Errors, constants, and address utilities
//! 
//! ## Usage
//! 
//! ```rust
//! use swap_sdk_core::{currency_equals, ChainId, Currency, Token, ETHER, WETH};
//! 
//! let weth = Token::new(
//!     ChainId::Mainnet,
//!     "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
//!     18,
//!     Some("WETH"),
//!     Some("Wrapped Ether"),
//!     None,
//! )?;
//! assert_eq!(weth.address(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
//! 
//! let wrapped = &WETH[&ChainId::Mainnet];
//! assert!(!weth.sorts_before(wrapped)?);
//! assert!(!currency_equals(&Currency::from(weth), &ETHER));
//! # Ok::<(), swap_sdk_core::SdkError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export domain entities
pub use domain::{
    currency_equals, wrapped_native, BaseCurrency, ChainId, Currency, NativeCurrency, Token,
    TokenRecord, TokenRepository, ETHER, NATIVE_ETHER, WETH,
};

// Re-export infrastructure
pub use infrastructure::{SdkConfig, TokenList};

// Re-export shared types
pub use shared::error::SdkError;
pub use shared::types::SdkResult;
pub use shared::utils::validate_and_parse_address;

/// Initialize logging
///
/// Fails if a logger has already been installed in this process.
pub fn init() -> Result<(), log::SetLoggerError> {
    env_logger::try_init()?;
    log::debug!("{} {} initialized", NAME, VERSION);
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
