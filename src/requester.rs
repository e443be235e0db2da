// requester.rs

use crate::error::SkillSyncError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SkillSyncError>;

/// Request payload, tagged by serialization strategy.
///
/// The two shapes are handled differently on the wire: JSON bodies carry
/// `Content-Type: application/json`, multipart bodies leave the content type
/// to the transport so it can set the form boundary.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON-serializable payload, sent as `application/json`.
    Json(serde_json::Value),
    /// One file field of a multipart form, passed through unmodified.
    Multipart { field: String, file_name: String, content: Vec<u8> },
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }
}

/// Trait for different request implementations (HTTP today, mocks in tests)
#[async_trait]
pub trait Requester: Send + Sync {
    /// Execute one HTTP request against the resolved base URL.
    ///
    /// `token`, when present, is attached as `Authorization: Token <token>`.
    /// With `fail_on_error` set, a non-2xx response becomes
    /// `SkillSyncError::RequestFailed` carrying the exact status.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HashMap<String, String>>,
        token: Option<&str>,
        fail_on_error: bool,
    ) -> Result<http::Response<Bytes>>;
}
