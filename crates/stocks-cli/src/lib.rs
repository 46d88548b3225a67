//! Interactive command-line interface for stocks.
//!
//! The REPL is generic over its input and output streams so the integration
//! tests can drive it with scripted sessions.

pub mod commands;
pub mod error;
pub mod repl;

pub use error::CliError;
pub use repl::Repl;
