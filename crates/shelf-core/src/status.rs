//! # Status Messages
//!
//! The single transient notification shown above the dashboard.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CRUD outcome ──► StatusMessage { id: n, kind, text } ──► Toast        │
//! │                          │                                              │
//! │                          ├── user clicks ✕      ──► cleared            │
//! │                          ├── 3 s elapse         ──► cleared (if id n)  │
//! │                          └── next outcome (n+1) ──► overwritten        │
//! │                                                                         │
//! │  At most one message is live; there is no queue.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the message reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// A user-facing notification.
///
/// `id` is assigned by the store from a monotonically increasing sequence,
/// so a delayed dismissal can tell whether the message it was armed for is
/// still the one on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusMessage {
    #[ts(type = "number")]
    pub id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(id: u64, text: impl Into<String>) -> Self {
        StatusMessage {
            id,
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(id: u64, text: impl Into<String>) -> Self {
        StatusMessage {
            id,
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_as_type() {
        let msg = StatusMessage::error(3, "Failed to fetch books.");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["text"], "Failed to fetch books.");
        assert!(msg.is_error());
    }
}
