//! Centime - Terminal-based expense tracking and budget forecasting
//!
//! This library provides the core functionality for the Centime budgeting
//! application. Expenses are logged from the command line and aggregated
//! into a monthly dashboard, spending trends over time, and a budget
//! forecast against per-type targets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path and profile management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, settings, loan terms)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation reports (dashboard, trend, forecast)
//! - `display`: Terminal formatting helpers
//! - `export`: CSV/JSON/YAML profile export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use centime::config::paths::CentimePaths;
//! use centime::storage::Storage;
//!
//! let paths = CentimePaths::new("default")?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CentimeError, CentimeResult};
