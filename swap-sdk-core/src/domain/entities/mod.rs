//! Domain entities and value objects
//! 
//! This module contains the core domain entities and value objects
//! that represent currencies and tokens across chains.

pub mod currency;
pub mod network;
pub mod token;

// Re-export entities
pub use currency::*;
pub use network::*;
pub use token::*;
