//! CLI module for toolshelf - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing, showing,
//! favoriting, and settings, plus TUI launch when no subcommand is given.

pub mod commands;

pub use commands::Cli;
