//! Shared types, utilities, and constants
//!
//! This module contains common types, utilities, and constants used throughout
//! the display core. It provides a centralized location for shared functionality.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;
pub mod config;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use constants::*;
pub use error::*;
pub use config::*;
