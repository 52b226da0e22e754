//! Provider registry
//!
//! The provider is what the host talks to first: it names the type prefix,
//! lists the data sources it offers, and turns a configured pfSense client
//! into the provider data every data source receives in Configure.
//!
//! # Modules
//!
//! - [`system_version`]: `<prefix>_system_version` data source

pub mod system_version;

use std::collections::BTreeMap;

use tracing::info;

use crate::config::{PROVIDER_TYPE_NAME, ProviderConfig};
use crate::framework::{Context, DataSource, ProviderData, Schema};
use crate::pfsense::Client;

pub use system_version::{SystemVersionDataSource, SystemVersionModel};

/// Builds a fresh, unconfigured data source
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

/// Name and version the provider reports to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

pub struct Provider {
    version: String,
    config: ProviderConfig,
}

impl Provider {
    pub fn new(version: impl Into<String>, config: ProviderConfig) -> Self {
        Self {
            version: version.into(),
            config,
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    pub fn data_sources(&self) -> Vec<DataSourceFactory> {
        vec![SystemVersionDataSource::factory as DataSourceFactory]
    }

    /// Builds the data source registered under `type_name`, if any
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .map(|factory| factory())
            .find(|data_source| data_source.metadata(PROVIDER_TYPE_NAME) == type_name)
    }

    /// Schemas of every data source keyed by type name under `provider_type_name`
    pub fn schemas(&self, provider_type_name: &str) -> BTreeMap<String, Schema> {
        self.data_sources()
            .into_iter()
            .map(|factory| {
                let data_source = factory();
                (
                    data_source.metadata(provider_type_name),
                    data_source.schema(),
                )
            })
            .collect()
    }

    /// Wraps a configured client for hand-off to data source Configure
    pub fn provider_data(&self, client: Client) -> ProviderData {
        info!("pfSense client configured");
        ProviderData::new(client)
    }

    /// Fresh request context bounded by the configured read timeout
    pub fn read_context(&self) -> Context {
        Context::with_timeout(self.config.read_timeout())
    }
}
