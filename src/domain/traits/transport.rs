use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::application::errors::ApiResult;

/// HTTP method used by the broadcast API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request against the API, relative to the transport's base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::Get,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    pub fn post<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: Method::Post,
            segments: segments.into_iter().map(Into::into).collect(),
            body: Some(body),
        }
    }

    /// Path as `/seg/seg`, unescaped
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// Transport trait - abstraction over the HTTP layer
///
/// Implementations return the response payload with any server envelope removed.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}
