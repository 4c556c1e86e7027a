use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

use super::client::MetadataSource;
use super::error::MetadataError;

/// In-memory [`MetadataSource`]. Unknown ids answer with a 404 status error.
#[derive(Debug, Default)]
pub struct MockMetadataSource {
    owners: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    malformed: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, id: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.owners.insert(id.into(), display_name.into());
        self
    }

    /// Delays the answer for `id`, to reorder completion of concurrent lookups.
    pub fn with_delay(mut self, id: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(id.into(), delay);
        self
    }

    /// Answers `id` with a decode error.
    pub fn with_malformed(mut self, id: impl Into<String>) -> Self {
        self.malformed.push(id.into());
        self
    }

    /// Number of upstream calls made for `id`.
    pub fn calls_for(&self, id: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == id).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }
}

impl MetadataSource for MockMetadataSource {
    async fn owner_display_name(&self, id: &str) -> Result<String, MetadataError> {
        self.calls.lock().push(id.to_string());

        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }

        if self.malformed.iter().any(|m| m == id) {
            return Err(MetadataError::Decode {
                id: id.to_string(),
                message: "missing field `user`".to_string(),
            });
        }

        self.owners
            .get(id)
            .cloned()
            .ok_or_else(|| MetadataError::Status {
                id: id.to_string(),
                status: 404,
            })
    }
}
