//! Interface to the remote pfSense API client
//!
//! Transport, authentication and response parsing live in the client
//! implementation behind [`SystemApi`]; data sources only see [`Client`].

pub mod client;
pub mod error;

pub use client::{Client, SystemApi, SystemVersion};
pub use error::ClientError;
