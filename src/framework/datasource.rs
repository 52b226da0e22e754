//! Data source lifecycle trait and the values passed through it

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::framework::context::Context;
use crate::framework::diagnostics::Diagnostics;
use crate::framework::schema::Schema;

/// Opaque value the provider hands to each data source during Configure
///
/// Keeps the concrete type name alongside the value so a data source that
/// receives the wrong type can say what it got.
#[derive(Clone)]
pub struct ProviderData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the concrete type stored in this value
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the stored value if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderData")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Output container a data source writes its result into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    raw: Option<serde_json::Value>,
}

impl State {
    /// Serializes `value` into the state, replacing anything already set
    ///
    /// On failure the state is left unchanged and the error is returned as a diagnostic.
    pub fn set<T: Serialize>(&mut self, value: &T) -> Diagnostics {
        let mut diags = Diagnostics::new();
        match serde_json::to_value(value) {
            Ok(raw) => self.raw = Some(raw),
            Err(e) => diags.add_error(
                "State Write Error",
                format!("An unexpected error was encountered writing the state: {}", e),
            ),
        }
        diags
    }

    /// Deserializes the state into `T`, or `None` when nothing was set
    pub fn get<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.raw.clone().map(serde_json::from_value)
    }

    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    pub fn raw(&self) -> Option<&serde_json::Value> {
        self.raw.as_ref()
    }
}

/// Result of one Read call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

/// Lifecycle a data source implements for the host
///
/// The host calls `metadata` and `schema` freely, `configure` before any
/// `read`, and then `read` any number of times, possibly concurrently.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the fully-qualified type name under the given provider prefix
    fn metadata(&self, provider_type_name: &str) -> String;

    /// Returns the attribute schema; must be identical across calls
    fn schema(&self) -> Schema;

    /// Receives provider data, which is `None` during early discovery passes
    fn configure(&mut self, _provider_data: Option<&ProviderData>) -> Diagnostics {
        Diagnostics::new()
    }

    /// Performs one fetch and maps it into the response state
    async fn read(&self, ctx: &Context) -> ReadResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn provider_data_downcasts_to_stored_type() {
        let data = ProviderData::new(String::from("client"));

        assert_eq!(
            data.downcast_ref::<String>().map(String::as_str),
            Some("client")
        );
        assert!(data.downcast_ref::<u32>().is_none());
        assert_eq!(data.type_name(), "alloc::string::String");
    }

    #[test]
    fn state_set_then_get_returns_value() {
        let mut state = State::default();

        let diags = state.set(&Sample {
            name: "pfsense".to_string(),
        });

        assert!(diags.is_empty());
        assert!(state.is_set());
        assert_eq!(
            state.get::<Sample>().unwrap().unwrap(),
            Sample {
                name: "pfsense".to_string()
            }
        );
    }

    #[test]
    fn state_get_returns_none_when_unset() {
        let state = State::default();

        assert!(state.get::<Sample>().is_none());
        assert!(state.raw().is_none());
    }
}
