//! Request and response bodies exchanged over the public HTTP API.
//!
//! Every handler answers with either one of the payload types below or an
//! [`ErrorResponse`] envelope.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Lenient single-field decoding
// ---------------------------------------------------------------------------

/// Reads one string field out of a JSON object the way the public API has
/// always accepted it:
/// - a top-level `null` decodes as the empty string;
/// - the key matches regardless of ASCII case;
/// - a `null` value leaves the field as it was;
/// - when the key repeats, the last non-null value wins;
/// - unknown keys are skipped.
///
/// Any other top-level type, or a non-string value for the field, is an error.
struct StringField(&'static str);

impl<'de> Visitor<'de> for StringField {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a string `{}` field, or null", self.0)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        let mut value = String::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(self.0) {
                if let Some(v) = map.next_value::<Option<String>>()? {
                    value = v;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(value)
    }
}

fn string_field<'de, D: Deserializer<'de>>(d: D, name: &'static str) -> Result<String, D::Error> {
    d.deserialize_any(StringField(name))
}

// ---------------------------------------------------------------------------
// Chirp validation
// ---------------------------------------------------------------------------

/// Request body for `POST /api/validate_chirp`.
///
/// A missing or `null` `body` field decodes as the empty string and is then
/// rejected by validation rather than by decoding.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChirpRequest {
    pub body: String,
}

impl<'de> Deserialize<'de> for ChirpRequest {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Self {
            body: string_field(d, "body")?,
        })
    }
}

/// Successful response body for `POST /api/validate_chirp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedChirp {
    /// The submitted text with every denylisted word masked.
    pub cleaned_body: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Request body for `POST /api/users`. Decoded like [`ChirpRequest`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Self {
            email: string_field(d, "email")?,
        })
    }
}

/// Response body for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error envelope returned on any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chirp_request_missing_body_is_empty() {
        let req: ChirpRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.body, "");
    }

    #[test]
    fn chirp_request_ignores_unknown_fields() {
        let req: ChirpRequest =
            serde_json::from_value(json!({"body": "hi", "extra": 1})).unwrap();
        assert_eq!(req.body, "hi");
    }

    #[test]
    fn chirp_request_rejects_wrong_type() {
        let res: Result<ChirpRequest, _> = serde_json::from_value(json!({"body": 42}));
        assert!(res.is_err());
    }

    fn chirp(raw: &str) -> Result<ChirpRequest, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[test]
    fn top_level_null_is_empty() {
        assert_eq!(chirp("null").unwrap().body, "");
        let u: CreateUserRequest = serde_json::from_str("null").unwrap();
        assert_eq!(u.email, "");
    }

    #[test]
    fn null_field_is_empty() {
        assert_eq!(chirp(r#"{"body":null}"#).unwrap().body, "");
    }

    #[test]
    fn null_field_keeps_earlier_value() {
        assert_eq!(chirp(r#"{"body":"a","body":null}"#).unwrap().body, "a");
    }

    #[test]
    fn key_matches_any_case() {
        assert_eq!(chirp(r#"{"Body":"kerfuffle"}"#).unwrap().body, "kerfuffle");
        assert_eq!(chirp(r#"{"BODY":"x"}"#).unwrap().body, "x");
        let u: CreateUserRequest = serde_json::from_str(r#"{"Email":"a@b.c"}"#).unwrap();
        assert_eq!(u.email, "a@b.c");
    }

    #[test]
    fn last_duplicate_key_wins() {
        assert_eq!(
            chirp(r#"{"body":"a","body":"kerfuffle"}"#).unwrap().body,
            "kerfuffle"
        );
        assert_eq!(chirp(r#"{"body":"a","Body":"b"}"#).unwrap().body, "b");
        assert_eq!(chirp(r#"{"Body":"a","body":"b"}"#).unwrap().body, "b");
    }

    #[test]
    fn non_object_is_rejected() {
        for raw in [r#""body""#, "42", "[]", "true"] {
            assert!(chirp(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn wrong_field_type_is_rejected_even_when_repeated() {
        assert!(chirp(r#"{"body":"a","body":7}"#).is_err());
    }

    #[test]
    fn error_response_wire_shape() {
        let e = ErrorResponse::new("Chirp is too long");
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            json!({"error": "Chirp is too long"})
        );
    }

    #[test]
    fn user_response_field_names() {
        let now = Utc::now();
        let u = UserResponse {
            id: Uuid::nil(),
            created_at: now,
            updated_at: now,
            email: "a@b.c".into(),
        };
        let v = serde_json::to_value(&u).unwrap();
        for key in ["id", "created_at", "updated_at", "email"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
    }
}
