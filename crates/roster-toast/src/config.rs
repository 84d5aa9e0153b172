//! Queue configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default number of toasts kept at once.
pub const DEFAULT_LIMIT: usize = 1;

/// Default time between dismissing a toast and deleting it.
///
/// Long enough that nobody sees it fire during normal use; closed toasts
/// are in practice removed by the next toast evicting them.
pub const DEFAULT_REMOVE_DELAY: Duration = Duration::from_millis(1_000_000);

/// Toast queue settings.
///
/// Deserializes from e.g. YAML:
///
/// ```yaml
/// limit: 1
/// remove_delay_ms: 1000000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToasterConfig {
    /// Maximum toasts held at once. 0 is read as 1.
    pub limit: usize,
    /// Delay between dismissal and removal.
    #[serde(
        rename = "remove_delay_ms",
        serialize_with = "serialize_millis",
        deserialize_with = "deserialize_millis"
    )]
    pub remove_delay: Duration,
}

impl ToasterConfig {
    /// The cap actually applied.
    pub fn effective_limit(&self) -> usize {
        self.limit.max(1)
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn remove_delay(mut self, delay: Duration) -> Self {
        self.remove_delay = delay;
        self
    }
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            remove_delay: DEFAULT_REMOVE_DELAY,
        }
    }
}

fn serialize_millis<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(delay.as_millis().try_into().unwrap_or(u64::MAX))
}

fn deserialize_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}
