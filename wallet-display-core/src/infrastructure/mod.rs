//! Infrastructure layer - collaborator implementations
//!
//! This module contains concrete implementations of the domain seams that a
//! host application can use as-is.

pub mod memory;

// Re-export infrastructure components
pub use memory::*;
