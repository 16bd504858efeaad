//! Configuration module for Hisaab
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HisaabPaths;
pub use settings::{DataSource, ServerSettings, Settings};
