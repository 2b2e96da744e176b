//! User interface module.
//!
//! This module contains all UI-related functionality, including:
//! - CLI argument parsing (cli module)
//! - Output and reporting (output module)

pub mod cli;
pub mod output;
