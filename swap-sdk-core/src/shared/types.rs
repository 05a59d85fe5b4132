use std::path::PathBuf;

// Basic types for SDK operations
pub type Address = String;
pub type Decimals = u8;

pub type SdkResult<T> = Result<T, crate::shared::error::SdkError>;

/// Path to a JSON token list
pub type TokenListPath = PathBuf;
