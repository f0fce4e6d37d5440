//! Radar chart configuration editor.
//!
//! Core domain (models, presets, validation), persistence (storage, config),
//! the share-URL codec, and the terminal UI and CLI built on top of them.

pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod presets;
pub mod share;
pub mod storage;
pub mod tui;
pub mod validation;
