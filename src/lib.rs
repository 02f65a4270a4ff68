//! advisory-search
//!
//! Fuzzy ticker and client search for an advisory back office, plus the
//! client-table and sales-pipeline filters built on the same records.
//!
//! - [`search`] - edit-distance ranking for search-as-you-type
//! - [`records`] - stock, client and lead rows
//! - [`source`] - candidate sources handed to the matcher
//! - [`clients`] / [`leads`] - table filters and sorting
//! - [`advice`] - trade advice validation and recipients

pub mod advice;
pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod error;
pub mod leads;
pub mod records;
pub mod search;
pub mod source;

pub use error::AppError;
pub use search::{distance, rank, FuzzyMatcher, MatchPolicy, MatchResult};
