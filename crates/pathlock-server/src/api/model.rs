//! Request models for the lock endpoints

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use pathlock_common::{PATH, PathlockError};
use pathlock_core::LockOperation;

/// Event-style request body
///
/// ```json
/// { "type": "LOCK", "payload": { "evidencePath": "evidence/1" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub payload: Option<LockPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockPayload {
    #[serde(default)]
    pub evidence_path: Option<String>,
}

impl LockEvent {
    /// Decode an event from a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, PathlockError> {
        serde_json::from_slice(body).map_err(PathlockError::undecodable_body)
    }

    /// Resolve the operation and key; the type is checked before the payload
    pub fn into_request(self) -> Result<(LockOperation, String), PathlockError> {
        let operation = self.event_type.parse::<LockOperation>()?;
        let key = self
            .payload
            .and_then(|p| p.evidence_path)
            .ok_or_else(|| PathlockError::missing_parameter("payload.evidencePath"))?;
        Ok((operation, key))
    }
}

/// Decode one form-encoded query component, rejecting invalid UTF-8
fn decode_component(raw: &str) -> Result<String, PathlockError> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            PathlockError::MissingOrMalformedInput(format!("malformed query: {}", e))
        })
}

/// Extract the single `path` value from a raw query string
///
/// The parameter must appear exactly once. An empty value (`?path=`) is a
/// valid key. A value that does not decode to UTF-8 is rejected.
pub fn single_path(query_string: &str) -> Result<String, PathlockError> {
    let mut values = Vec::new();
    for pair in query_string.split('&').filter(|pair| !pair.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(name).is_ok_and(|name| name == PATH) {
            values.push(value);
        }
    }

    match values.as_slice() {
        [value] => decode_component(value),
        [] => Err(PathlockError::missing_parameter(PATH)),
        _ => Err(PathlockError::repeated_parameter(PATH)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lock_event() {
        let event =
            LockEvent::from_slice(br#"{"type":"LOCK","payload":{"evidencePath":"evidence/1"}}"#)
                .unwrap();
        assert_eq!(
            event.into_request().unwrap(),
            (LockOperation::Lock, "evidence/1".to_string())
        );
    }

    #[test]
    fn test_decode_error_is_malformed_input() {
        let err = LockEvent::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, PathlockError::MissingOrMalformedInput(_)));
        assert!(err.to_string().starts_with("error decoding request: "));
    }

    #[test]
    fn test_unknown_type_reported_before_missing_payload() {
        let event = LockEvent::from_slice(br#"{"type":"PEEK"}"#).unwrap();
        assert_eq!(
            event.into_request(),
            Err(PathlockError::UnrecognizedOperation("PEEK".to_string()))
        );
    }

    #[test]
    fn test_missing_type_is_unrecognized() {
        let event = LockEvent::from_slice(br#"{"payload":{"evidencePath":"a"}}"#).unwrap();
        assert_eq!(
            event.into_request(),
            Err(PathlockError::UnrecognizedOperation(String::new()))
        );
    }

    #[test]
    fn test_missing_evidence_path() {
        let event = LockEvent::from_slice(br#"{"type":"UNLOCK","payload":{}}"#).unwrap();
        assert_eq!(
            event.into_request(),
            Err(PathlockError::missing_parameter("payload.evidencePath"))
        );
    }

    #[test]
    fn test_single_path() {
        assert_eq!(single_path("path=evidence%2F1").unwrap(), "evidence/1");
        assert_eq!(single_path("path=").unwrap(), "");
        assert_eq!(single_path("other=1&path=a+b").unwrap(), "a b");
        assert_eq!(
            single_path(""),
            Err(PathlockError::missing_parameter("path"))
        );
        assert_eq!(
            single_path("path=a&path=b"),
            Err(PathlockError::repeated_parameter("path"))
        );
        assert_eq!(single_path("path").unwrap(), "");
        assert_eq!(single_path("&path=a%2Bb&").unwrap(), "a+b");
        assert_eq!(single_path("%FF=1&path=a").unwrap(), "a");
    }

    #[test]
    fn test_single_path_rejects_invalid_utf8() {
        for query in ["path=%FF", "path=%FE", "path=ok%C3"] {
            let err = single_path(query).unwrap_err();
            assert!(matches!(err, PathlockError::MissingOrMalformedInput(_)));
            assert!(err.to_string().starts_with("malformed query: "));
        }
        // Multi-byte sequences that are valid still decode
        assert_eq!(single_path("path=%C3%A9").unwrap(), "\u{e9}");
    }
}
