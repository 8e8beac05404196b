//! NotchClip: clipboard history engine and headless shell.
//!
//! The engine lives in the `nc-*` crates; this crate wires them together,
//! loads configuration, sets up logging and runs the polling loop.

pub mod bootstrap;
pub mod cli;

pub use cli::Cli;
