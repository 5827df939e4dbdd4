//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts of the display core.

pub mod wallet;
pub mod token;
pub mod profile;

// Re-export entities
pub use wallet::*;
pub use token::*;
pub use profile::*;
