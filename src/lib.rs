//! trackui - Sprint Tracker UI State Library
//!
//! The stateful pieces of a sprint tracker's item pages, independent of any
//! rendering surface.
//!
//! # Core Concepts
//!
//! - **Preference flags**: string key/value store where any non-empty value
//!   means "on" (the hints toggle)
//! - **Item form modes**: one creation form adapted to bugs, tasks, stories
//!   and epics
//! - **Burndown data**: the series an external chart renderer consumes
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.trackui.toml`
//! - `error`: Error types and result aliases
//! - `prefs`: Preference flag store (cookie, memory and file backends)
//! - `form`: Item creation form controller
//! - `chart`: Burndown chart data contract
//! - `fragment`: Item view fragment request paths
//! - `storage`: Data directory and JSON persistence
//! - `lock`: File locking and atomic writes

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod fragment;
pub mod lock;
pub mod output;
pub mod prefs;
pub mod storage;

pub use error::{Error, Result};
