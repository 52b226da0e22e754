//! Client handle for querying a pfSense appliance

#[cfg(test)]
use mockall::automock;

use std::fmt;
use std::sync::Arc;

use crate::framework::context::Context;
use crate::pfsense::error::ClientError;

/// Running and newest-available firmware version of the appliance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemVersion {
    /// Version currently running
    pub current: String,
    /// Newest version known to be available; empty when the appliance cannot tell
    pub latest: String,
}

/// Operations the remote pfSense API exposes to data sources
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SystemApi: Send + Sync {
    /// Fetches the current and latest system version
    ///
    /// Implementations should stop work once `ctx` is cancelled or past its deadline.
    async fn get_system_version(&self, ctx: &Context) -> Result<SystemVersion, ClientError>;
}

/// Shared, cheaply cloneable handle to a configured pfSense API client
///
/// This is the type the provider passes to data sources as provider data.
#[derive(Clone)]
pub struct Client {
    api: Arc<dyn SystemApi>,
}

impl Client {
    pub fn new(api: Arc<dyn SystemApi>) -> Self {
        Self { api }
    }

    /// Fetches the system version, bounded by the request context
    pub async fn get_system_version(&self, ctx: &Context) -> Result<SystemVersion, ClientError> {
        // Deferred so a context that is already done never reaches the API
        ctx.run(async { self.api.get_system_version(ctx).await })
            .await
    }

    /// Returns true if both handles share the same underlying API client
    pub fn ptr_eq(&self, other: &Client) -> bool {
        Arc::ptr_eq(&self.api, &other.api)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
