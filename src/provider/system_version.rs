//! `system_version` data source: current and latest pfSense firmware version

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::framework::{
    Attribute, Context, DataSource, Diagnostics, ProviderData, ReadResponse, Schema,
};
use crate::pfsense::Client;

const TYPE_NAME_SUFFIX: &str = "_system_version";

/// State written by a successful read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemVersionModel {
    pub current: String,
    pub latest: String,
}

/// Data source reporting the running and newest available system version
#[derive(Debug, Default)]
pub struct SystemVersionDataSource {
    client: Option<Client>,
}

impl SystemVersionDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed constructor registered with the provider
    pub fn factory() -> Box<dyn DataSource> {
        Box::new(Self::new())
    }

    /// Client stored by the last successful Configure
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

#[async_trait::async_trait]
impl DataSource for SystemVersionDataSource {
    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{}{}", provider_type_name, TYPE_NAME_SUFFIX)
    }

    fn schema(&self) -> Schema {
        Schema::new("Retrieves current and latest system version.")
            .with_attribute(
                "current",
                Attribute::computed_string("Current pfSense system version."),
            )
            .with_attribute(
                "latest",
                Attribute::computed_string("Latest pfSense system version."),
            )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>) -> Diagnostics {
        let mut diags = Diagnostics::new();

        // Absent during the host's discovery passes, before any client exists
        let Some(provider_data) = provider_data else {
            return diags;
        };

        let Some(client) = provider_data.downcast_ref::<Client>() else {
            warn!(
                "Rejected provider data of type {}",
                provider_data.type_name()
            );
            diags.add_error(
                "Unexpected Data Source Configure Type",
                format!(
                    "Expected {}, got: {}. Please report this issue to the provider developers.",
                    std::any::type_name::<Client>(),
                    provider_data.type_name()
                ),
            );
            return diags;
        };

        debug!("Configured system version data source");
        self.client = Some(client.clone());
        diags
    }

    async fn read(&self, ctx: &Context) -> ReadResponse {
        let mut resp = ReadResponse::default();

        let Some(client) = &self.client else {
            resp.diagnostics.add_error(
                "Unconfigured pfSense client",
                "Expected a configured pfSense client, but Configure did not supply one. \
                 Please report this issue to the provider developers.",
            );
            return resp;
        };

        let version = match client.get_system_version(ctx).await {
            Ok(version) => version,
            Err(e) => {
                error!("Failed to get system version: {}", e);
                resp.diagnostics
                    .add_error("Unable to get system version", e.to_string());
                return resp;
            }
        };

        debug!(
            "Read system version: current={}, latest={}",
            version.current, version.latest
        );

        let data = SystemVersionModel {
            current: version.current,
            latest: version.latest,
        };

        resp.diagnostics.append(resp.state.set(&data));
        resp
    }
}
