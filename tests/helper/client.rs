//! pfSense client test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use pfsense_provider::framework::Context;
use pfsense_provider::pfsense::{Client, ClientError, SystemApi, SystemVersion};

/// Fake pfSense API that counts calls and replays a fixed response
pub struct RecordingApi {
    response: Result<SystemVersion, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl RecordingApi {
    pub fn returning(current: &str, latest: &str) -> Self {
        Self {
            response: Ok(SystemVersion {
                current: current.to_string(),
                latest: latest.to_string(),
            }),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call with a network error carrying `message`
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SystemApi for RecordingApi {
    async fn get_system_version(&self, _ctx: &Context) -> Result<SystemVersion, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.response.clone().map_err(ClientError::Network)
    }
}

/// Wraps a recording API in a client, keeping a handle to inspect calls
pub fn recording_client(api: RecordingApi) -> (Arc<RecordingApi>, Client) {
    let api = Arc::new(api);
    let client = Client::new(api.clone());
    (api, client)
}
