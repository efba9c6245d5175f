//! Data Transfer Objects shared between the front-end and the backend API.

pub mod auth;
pub mod network;
pub mod pin;
pub mod profile;
pub mod withdraw;

use serde::{Deserialize, Serialize};

/// Uniform response wrapper used by every endpoint except login.
///
/// The backend signals success through the `response` flag rather than the
/// HTTP status alone; `message` carries the human-readable reason on failure
/// and sometimes a confirmation on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub response: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"response":false}"#).unwrap();
        assert!(!env.response);
        assert_eq!(env.message, None);
        assert_eq!(env.data, None);
    }

    #[test]
    fn envelope_carries_payload() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"response":true,"message":"ok","data":[1,2]}"#).unwrap();
        assert!(env.response);
        assert_eq!(env.data, Some(vec![1, 2]));
    }
}
