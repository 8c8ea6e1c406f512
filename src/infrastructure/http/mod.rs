//! reqwest-backed transport for the broadcast API

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::application::errors::{ApiError, ApiResult, ConfigError};
use crate::domain::traits::{ApiRequest, Method, Transport};

/// Error envelope the server renders on failure
#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    status: u16,
    #[serde(default)]
    code: i64,
    #[serde(default)]
    description: String,
}

/// HTTP transport
pub struct HttpTransport {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidValue(format!("api base-url {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue(format!("api base-url {} cannot be a base", base_url)));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("http client: {}", e)))?;

        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    /// Full URL for a request, each segment percent-encoded
    pub fn url_for(&self, request: &ApiRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(request.segments.iter().map(String::as_str));
        }
        url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.url_for(&request);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(status, &text)
    }
}

/// Map status and body to the payload or an error
pub fn decode_response(status: StatusCode, text: &str) -> ApiResult<Value> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Auth(format!("status: {}, body: {}", status, text)));
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text.to_string(),
        });
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ApiError::Parse(format!("Invalid JSON response: {}", e)))?;

    unwrap_envelope(value, status)
}

fn unwrap_envelope(value: Value, status: StatusCode) -> ApiResult<Value> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Ok(other),
    };

    if let Some(error) = map.remove("error").filter(|e| !e.is_null()) {
        let body: ErrorBody = serde_json::from_value(error)
            .map_err(|e| ApiError::Parse(format!("Invalid error envelope: {}", e)))?;
        let status = if body.status == 0 { status.as_u16() } else { body.status };
        if status == 401 || status == 403 {
            return Err(ApiError::Auth(body.description));
        }
        return Err(ApiError::Server {
            status,
            code: body.code,
            description: body.description,
        });
    }

    if let Some(data) = map.remove("data") {
        return Ok(data);
    }

    Ok(Value::Object(map))
}
