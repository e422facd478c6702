//! Core library for `charstrip`, which deletes a set of bytes from a file in place.
//!
//! The work happens in three sequential stages (see [`strip`]): the target is
//! opened alongside an unnamed scratch file, filtered into the scratch file,
//! and then overwritten and truncated from it.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module defining the entry point logic shared by both binaries.
pub mod entry_point;

/// Module for CLI output formatting: tables, progress bar, banners.
pub mod output;

/// The open, filter and replace pipeline.
pub mod strip;

/// Module containing utility functions.
pub mod utils;
