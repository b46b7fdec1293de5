//! Attestation envelope data model.
//!
//! An [`Envelope`] wraps the originally attested payload together with the
//! metadata produced by a prior submission: the recorded digest and,
//! when the submission was notarized remotely, the ledger service's raw
//! response. Envelopes are transient values, constructed fresh per call
//! and never mutated by verification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EnvelopeError;
use crate::hash::keccak256_str;

/// Service label recorded in remote timestamps created by this SDK.
const DEFAULT_SERVICE: &str = "ledger";

/// The unit under verification: attested payload plus embedded metadata.
///
/// # Example
///
/// ```rust
/// use notary_core::Envelope;
/// use serde_json::json;
///
/// let envelope = Envelope::local(json!({"amount": 42}));
/// assert!(envelope.metadata.timestamp.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// The originally attested payload: a string or any structured value.
    pub data: Value,

    /// Metadata recorded at submission time.
    pub metadata: EnvelopeMetadata,
}

/// Metadata embedded in an envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvelopeMetadata {
    /// The digest the submitter recorded (lowercase hex).
    #[serde(default)]
    pub hash: String,

    /// Informational algorithm label; never re-validated against `hash`.
    #[serde(
        rename = "hashAlgorithm",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hash_algorithm: Option<String>,

    /// Present only if the submission was notarized remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<RemoteTimestamp>,
}

/// A remote timestamp reference: the raw response returned by the submit
/// call, stored verbatim and re-interpreted loosely at verification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteTimestamp {
    /// Opaque label of the service that produced the response.
    pub service: String,

    /// The submission response, verbatim.
    pub response: Value,
}

impl Envelope {
    /// Build a locally-sealed envelope: digest computed over the payload's
    /// canonical text, no remote timestamp.
    pub fn local(data: Value) -> Self {
        let hash = keccak256_str(&canonical_text(&data));
        Self {
            data,
            metadata: EnvelopeMetadata {
                hash,
                hash_algorithm: Some("keccak256".to_string()),
                timestamp: None,
            },
        }
    }

    /// Build a notarized envelope embedding the submit response verbatim
    /// under the envelope's timestamp reference.
    pub fn notarized(data: Value, response: Value) -> Self {
        let mut envelope = Self::local(data);
        envelope.metadata.timestamp = Some(RemoteTimestamp {
            service: DEFAULT_SERVICE.to_string(),
            response,
        });
        envelope
    }

    /// The text the digest is computed over.
    ///
    /// A JSON string value is used verbatim; any other value is serialized
    /// with `serde_json`'s compact defaults. Verification of structured
    /// payloads is only reliable when the submission side hashed the same
    /// serialization — callers attesting non-string data must use this
    /// same canonical form when first computing the hash.
    pub fn canonical_text(&self) -> String {
        canonical_text(&self.data)
    }
}

fn canonical_text(data: &Value) -> String {
    match data {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl RemoteTimestamp {
    /// Extract the hash the ledger recorded for this submission, from
    /// `response.data.computed_hash_hex`.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvelopeError`] describing the first structural
    /// mismatch: response not an object, `data` missing, or
    /// `computed_hash_hex` missing/not a string.
    pub fn recorded_hash(&self) -> Result<&str, EnvelopeError> {
        let response = self
            .response
            .as_object()
            .ok_or(EnvelopeError::ResponseNotObject)?;
        let data = response
            .get("data")
            .and_then(Value::as_object)
            .ok_or(EnvelopeError::MissingData)?;
        data.get("computed_hash_hex")
            .and_then(Value::as_str)
            .ok_or(EnvelopeError::MissingRecordedHash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::keccak256_str;
    use serde_json::json;

    #[test]
    fn test_canonical_text_string_verbatim() {
        let envelope = Envelope::local(json!("plain text"));
        assert_eq!(envelope.canonical_text(), "plain text");
    }

    #[test]
    fn test_canonical_text_structured_value() {
        let envelope = Envelope::local(json!({"a": 1}));
        assert_eq!(envelope.canonical_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_local_envelope_hash() {
        let envelope = Envelope::local(json!("x"));
        assert_eq!(envelope.metadata.hash, keccak256_str("x"));
        assert_eq!(envelope.metadata.hash_algorithm.as_deref(), Some("keccak256"));
        assert!(envelope.metadata.timestamp.is_none());
    }

    #[test]
    fn test_notarized_envelope_embeds_response() {
        let response = json!({"data": {"computed_hash_hex": "ab"}});
        let envelope = Envelope::notarized(json!("x"), response.clone());
        let ts = envelope.metadata.timestamp.as_ref().unwrap();
        assert_eq!(ts.service, "ledger");
        assert_eq!(ts.response, response);
        assert_eq!(ts.recorded_hash(), Ok("ab"));
    }

    #[test]
    fn test_recorded_hash_response_not_object() {
        let ts = RemoteTimestamp {
            service: "ledger".into(),
            response: json!("nope"),
        };
        assert_eq!(ts.recorded_hash(), Err(EnvelopeError::ResponseNotObject));
    }

    #[test]
    fn test_recorded_hash_missing_data() {
        let ts = RemoteTimestamp {
            service: "ledger".into(),
            response: json!({"status": "ok"}),
        };
        assert_eq!(ts.recorded_hash(), Err(EnvelopeError::MissingData));
    }

    #[test]
    fn test_recorded_hash_missing_or_non_string_field() {
        let missing = RemoteTimestamp {
            service: "ledger".into(),
            response: json!({"data": {}}),
        };
        assert_eq!(
            missing.recorded_hash(),
            Err(EnvelopeError::MissingRecordedHash)
        );

        let non_string = RemoteTimestamp {
            service: "ledger".into(),
            response: json!({"data": {"computed_hash_hex": 7}}),
        };
        assert_eq!(
            non_string.recorded_hash(),
            Err(EnvelopeError::MissingRecordedHash)
        );
    }

    #[test]
    fn test_serde_field_names() {
        let envelope = Envelope::notarized(json!("x"), json!({"data": {}}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["metadata"]["hashAlgorithm"], json!("keccak256"));
        assert_eq!(value["metadata"]["timestamp"]["service"], json!("ledger"));

        let parsed: Envelope = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.metadata.hash, envelope.metadata.hash);
    }

    #[test]
    fn test_metadata_defaults_tolerate_missing_fields() {
        let parsed: Envelope = serde_json::from_str(r#"{"data": "x", "metadata": {}}"#).unwrap();
        assert!(parsed.metadata.hash.is_empty());
        assert!(parsed.metadata.timestamp.is_none());
    }
}
