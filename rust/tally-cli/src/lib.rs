//! Tally CLI library.
//!
//! Argument-driven front end over `tally-core`: every command takes its
//! inputs as values and returns rendered output, so the binary only parses
//! flags, prints, and sets the exit status.

pub mod colors;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use error::CliError;
