//! Back-office record types
//!
//! Rows as the record store hands them out. Each type implements
//! [`Labeled`](crate::search::Labeled) so it can be fed straight to the
//! fuzzy matcher.

pub mod client;
pub mod lead;
pub mod stock;

pub use client::{Client, ClientStatus, KycStatus, RiskProfile};
pub use lead::{Lead, LeadStage};
pub use stock::Stock;
