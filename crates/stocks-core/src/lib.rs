//! Core contracts for stocks.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The valuation fetcher trait and its error type
//! - The update-window computation shared by the CLI

pub mod domain;
pub mod error;
pub mod fetcher;

pub use domain::{NewValuation, Stock, Symbol, UtcDateTime, Valuation};
pub use error::ValidationError;
pub use fetcher::{fetch_window, FetchError, FetchErrorKind, Fetcher, YahooFetcher, GRACE_HOURS};
