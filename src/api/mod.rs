//! Thin client for the YNAB REST API and the wire types it exchanges.

pub mod client;
pub mod models;

pub use client::{ApiError, YnabClient};
