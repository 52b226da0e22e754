//! pfSense provider data sources
//!
//! # Modules
//!
//! - [`framework`]: Contract types shared with the orchestrator host (context, diagnostics, schema, data source trait)
//! - [`pfsense`]: Narrow interface to the remote pfSense API client
//! - [`provider`]: Provider registry and the data sources it exposes
//! - [`config`]: Provider configuration and data directory paths
//! - [`logging`]: File-based tracing setup

pub mod config;
pub mod framework;
pub mod logging;
pub mod pfsense;
pub mod provider;
