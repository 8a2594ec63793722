use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use super::{ApiRequest, Body, Method, RequestError, Transport, UploadFile};

/// Browser `fetch` transport built on `gloo-net`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    /// `base_url` is prefixed to every request path; empty means same origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, RequestError> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method.as_str(), url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let response = build(builder, request.body)?
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            debug!("{} {} failed with status {}", request.method.as_str(), url, status);
            return Err(RequestError::Status { status, body });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}

fn build(builder: RequestBuilder, body: Body) -> Result<Request, RequestError> {
    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Multipart { field, file } => builder.body(form_data(field, &file)?),
    };
    request.map_err(|e| RequestError::Encode(e.to_string()))
}

/// Wraps the file bytes in a `FormData` payload; the browser sets the
/// multipart boundary header itself.
fn form_data(field: &str, file: &UploadFile) -> Result<FormData, RequestError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(value: JsValue) -> RequestError {
    RequestError::Encode(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
