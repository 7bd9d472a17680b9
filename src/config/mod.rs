//! Configuration module for Centime
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Per-profile data directories

pub mod paths;

pub use paths::CentimePaths;
