//! Construction-time configuration.
//!
//! A deque has a single setting, fixed when it is built: whether it may be
//! shared between threads. The configuration is serde-friendly so it can be
//! embedded in a larger application config document.
//!
//! ```
//! use tagdeque::{Deque, DequeConfig};
//!
//! let config = DequeConfig::from_json(r#"{ "thread_safe": true }"#)?;
//! let deque = Deque::with_config(&config);
//! assert!(deque.is_thread_safe());
//! # Ok::<(), tagdeque::DequeError>(())
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Settings applied when a [`Deque`](crate::Deque) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DequeConfig {
    /// Block on contention instead of treating concurrent access as a bug.
    pub thread_safe: bool,
}

impl DequeConfig {
    /// Configuration for a deque shared between threads.
    #[must_use]
    pub const fn thread_safe() -> Self {
        Self { thread_safe: true }
    }

    /// Parses a JSON configuration document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_threaded() {
        assert!(!DequeConfig::default().thread_safe);
        assert!(DequeConfig::thread_safe().thread_safe);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = DequeConfig::from_json("{}").expect("parse");
        assert_eq!(config, DequeConfig::default());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&DequeConfig::thread_safe()).expect("serialize");
        assert_eq!(json, r#"{"thread_safe":true}"#);
        assert_eq!(DequeConfig::from_json(&json).expect("parse"), DequeConfig::thread_safe());
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = DequeConfig::from_json(r#"{ "thread_safe": "yes" }"#).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("invalid deque configuration"));
    }
}
