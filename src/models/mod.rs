//! Data models for radar chart configurations.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod attribute;
pub mod configuration;

// Re-export all model types
pub use attribute::{Attribute, AttributeLevelDescription};
pub use configuration::{Configuration, LevelDescription};
