//! Domain layer - entities and repositories
//!
//! This module contains the domain model of the display core and the seams
//! through which it reaches external collaborators.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
