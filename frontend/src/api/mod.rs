//! Transport helper shared by every console flow.
//!
//! A flow describes its call as an [`ApiRequest`] and hands it to a
//! [`Transport`]. The transport performs a single round trip and yields the
//! parsed JSON body, or a [`RequestError`] whose `Display` is the message the
//! flow shows to the user. There are no retries and no timeouts at this layer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

mod gloo;

pub use gloo::GlooTransport;

/// Failure of a single backend call.
///
/// `Display` yields only the human-readable message, so flows can embed it
/// directly after their status prefix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// The backend answered with a non-success status; the body text is the message.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("{0}")]
    Decode(String),

    /// The request body could not be built.
    #[error("{0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A file picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart { field: &'static str, file: UploadFile },
}

/// One call against the backend: method, path (with any query string),
/// headers, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    /// `POST` with an empty body.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(path)
        }
    }

    /// `POST` with a JSON body and the matching `Content-Type` header.
    pub fn post_json<T: Serialize>(path: impl Into<String>, payload: &T) -> Result<Self, RequestError> {
        let value =
            serde_json::to_value(payload).map_err(|e| RequestError::Encode(e.to_string()))?;
        Ok(Self {
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Body::Json(value),
            ..Self::post(path)
        })
    }

    /// `POST` with a multipart form holding `file` under `field`.
    pub fn post_multipart(path: impl Into<String>, field: &'static str, file: UploadFile) -> Self {
        Self {
            body: Body::Multipart { field, file },
            ..Self::post(path)
        }
    }
}

/// Performs a backend round trip.
///
/// Implementations must resolve to the parsed JSON body for a success status
/// and to [`RequestError::Status`] carrying the body text otherwise.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, RequestError>;
}

/// Sends `request` and decodes the JSON body into `T`.
pub async fn api<T, Tr>(transport: &Tr, request: ApiRequest) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    Tr: Transport + ?Sized,
{
    let value = transport.send(request).await?;
    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::FakeTransport;
    use common::requests::SearchResponse;
    use serde_json::json;

    #[test]
    fn status_error_displays_body_only() {
        let err = RequestError::Status {
            status: 400,
            body: "bad keyword".to_string(),
        };
        assert_eq!(err.to_string(), "bad keyword");
    }

    #[test]
    fn post_json_sets_content_type() {
        let request = ApiRequest::post_json("/api/config", &json!({ "a": 1 })).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(request.body, Body::Json(json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn api_reports_shape_mismatch_as_decode_error() {
        let transport = FakeTransport::new();
        transport.respond_ok(json!({ "count": "many" }));

        let result: Result<SearchResponse, _> = api(&transport, ApiRequest::get("/api/search")).await;
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }
}
