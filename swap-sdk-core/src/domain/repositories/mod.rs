//! Repository interfaces
//! 
//! This module contains the read-only lookup interfaces over token collections.

pub mod token_repository;

pub use token_repository::*;
