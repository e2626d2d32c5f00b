//! Navigation attempt as reported by the embedded content host.
//!
//! Only `url` is interpreted. Every other field the host supplies is kept in
//! `extra` untouched so denial logs carry the full payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One navigation attempt inside an embedded content surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// Target URL of the attempt.
    pub url: String,
    /// Host-supplied fields passed through verbatim (title, loading,
    /// navigationType, mainDocumentURL, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigationEvent {
    /// Event carrying only a URL, for hosts whose callback hands over nothing else.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extra: Map::new(),
        }
    }

    /// Attach a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// JSON form used in denial logs. Falls back to the bare URL if the
    /// payload cannot be serialized.
    pub fn to_log_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "navigation event not serializable; logging url only");
            Value::String(self.url.clone())
        })
    }
}
