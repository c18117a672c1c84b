//! Core types and traits for coinlens.
//!
//! This crate provides the foundational building blocks including:
//! - Price and indicator series (with an explicit undefined marker)
//! - Market data types (coin listings, coin details, price history points)
//! - Core traits for indicators and market data sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, IndicatorError};
pub use traits::*;
pub use types::*;
