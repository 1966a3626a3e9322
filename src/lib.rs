//! Release notes generation from release metadata and version control
//! history.
//!
//! A release is described by a small TOML file. Commits, contributors and
//! dependency changes between the previous release and the new one are
//! mined from git and rendered through a Tera template.
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod dependency;
pub mod error;
pub mod manifest;
pub mod report;
pub mod repo;
pub mod template;

pub use cli::Args;
pub use error::{ReleaseNotesError, Result};
