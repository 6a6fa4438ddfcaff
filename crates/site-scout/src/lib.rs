//! Site evaluation engine for vending-machine placement.
//!
//! The [`evaluation`] module owns the metric catalog, per-site rating stores, the
//! type-specific scorecards, and the orchestration that turns ratings into a
//! greenlight / watchlist / pass recommendation. Hosts wire it up through
//! [`config::AppConfig`] and [`telemetry::init`].

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
