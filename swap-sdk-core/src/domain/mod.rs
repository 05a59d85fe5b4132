//! Domain layer - entities, registry, and repositories
//! 
//! This module contains the token data model and the wrapped native registry.

pub mod entities;
pub mod registry;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use registry::*;
pub use repositories::*;
