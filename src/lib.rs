//! Derive calendar fields and period flags (business hours, weekend, US market
//! session) for an instant in a timezone, and export them for shell sessions.

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod templates;
pub mod utils;

pub use context::{build, TemporalContext, TemporalContextBuilder};
pub use error::{Result, TemporalError};
