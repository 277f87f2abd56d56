//! Log entry written by the JSONL layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of a JSONL log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,
    /// trace, debug, info, warn or error
    pub level: String,
    /// Instance name the app was started with
    pub instance: String,
    /// Module path of the event
    pub target: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl JsonLogEntry {
    pub fn new(
        level: impl Into<String>,
        instance: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            instance: instance.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Serialize to a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_omits_empty_fields() {
        let line = JsonLogEntry::new("info", "showcase", "showcase_core::catalog", "seeded")
            .to_json_line()
            .unwrap();
        assert!(line.contains("\"msg\":\"seeded\""));
        assert!(!line.contains("fields"));
    }
}
