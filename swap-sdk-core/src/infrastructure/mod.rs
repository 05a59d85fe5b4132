//! Infrastructure layer - configuration and file-backed token lists

pub mod config;
pub mod token_list;

// Re-export infrastructure components
pub use config::*;
pub use token_list::*;
