// response_ext.rs

use crate::error::SkillSyncError;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Extension trait for working with `http::Response<Bytes>`.
pub trait ResponseExt {
    /// Extracts the response body as `Bytes`.
    fn bytes(self) -> Bytes;

    /// Reads the response body as UTF-8 text, falling back to lossy decoding.
    fn text(self) -> String;

    /// Deserializes the response body as JSON.
    fn json<T: DeserializeOwned>(self) -> Result<T, SkillSyncError>;
}

impl ResponseExt for http::Response<Bytes> {
    fn bytes(self) -> Bytes {
        self.into_body()
    }

    fn text(self) -> String {
        let body = self.into_body();
        String::from_utf8(body.to_vec()).unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned())
    }

    fn json<T: DeserializeOwned>(self) -> Result<T, SkillSyncError> {
        let body = self.into_body();

        if body.is_empty() {
            return Err(SkillSyncError::SerializationError("Empty response body".to_string()));
        }

        serde_json::from_slice::<T>(&body).map_err(|e| {
            let preview_len = body.len().min(100);
            let preview = String::from_utf8_lossy(&body[..preview_len]);
            SkillSyncError::SerializationError(format!("Failed to deserialize JSON: {}. Body preview: {}", e, preview))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(body: &str) -> http::Response<Bytes> {
        http::Response::builder().status(200).body(Bytes::from(body.to_string())).unwrap()
    }

    #[test]
    fn json_parses_valid_body() {
        let value: Value = response(r#"{"id": 42, "name": "Ada"}"#).json().unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["name"], "Ada");
    }

    #[test]
    fn json_rejects_empty_body() {
        let err = response("").json::<Value>().unwrap_err();
        assert!(matches!(err, SkillSyncError::SerializationError(_)));
    }

    #[test]
    fn text_handles_invalid_utf8() {
        let resp = http::Response::builder().status(200).body(Bytes::from(vec![0xff, 0xfe, b'a'])).unwrap();
        assert!(resp.text().ends_with('a'));
    }
}
