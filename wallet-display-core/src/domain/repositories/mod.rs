//! Domain repositories
//!
//! This module contains the traits for the external collaborators the
//! display core talks to: the token list store and the feedback signal.

pub mod list_repository;
pub mod feedback_repository;

// Re-export repositories
pub use list_repository::*;
pub use feedback_repository::*;
