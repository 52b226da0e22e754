//! Host framework contract
//!
//! Types exchanged between the orchestrator host and a data source. The host
//! owns transport and call ordering; this layer only describes the shapes of
//! the four lifecycle calls.
//!
//! # Modules
//!
//! - [`context`]: Per-request cancellation and deadline
//! - [`datasource`]: `DataSource` trait, provider data hand-off and read state
//! - [`diagnostics`]: User-facing errors and warnings
//! - [`schema`]: Declarative attribute schema

pub mod context;
pub mod datasource;
pub mod diagnostics;
pub mod schema;

pub use context::{Context, ContextError};
pub use datasource::{DataSource, ProviderData, ReadResponse, State};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use schema::{Attribute, AttributeType, Schema};
