//! Operational utilities for the GoatedVIPs platform.
//!
//! Two standalone tools share this crate: `db-check`, which reports which
//! database environment variables are set without leaking their values,
//! and `status-server`, which answers every GET request with the
//! platform's fixed status page.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod mask;
pub mod page;
pub mod report;
pub mod server;
pub mod snapshot;
