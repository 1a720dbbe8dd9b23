//! `stockbook` command-line driver.
//!
//! Thin layer over `stockbook-inventory`: parse arguments, resolve
//! configuration, load the inventory file, apply one operation, save.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use commands::run;
pub use config::CliConfig;
