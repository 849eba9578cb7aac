//! BricsData Core — domain types and data providers.
//!
//! This crate contains everything that talks to the outside world or defines
//! what a record looks like:
//! - Domain types (countries, indicators, commodities, indicator records)
//! - Provider traits for annual indicators and daily closing prices
//! - World Bank and Yahoo Finance provider implementations
//! - Date-aligned join of several closing-price series

pub mod data;
pub mod domain;
