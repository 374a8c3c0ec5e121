//! Outgoing request description shared by the pipeline and its transports.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::client::key::{cache_key, Params};
use crate::error::{ApiError, Result};

/// HTTP method of an outgoing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Api Request ==
/// A call against the remote API, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path, e.g. `/lawyers`
    pub path: String,
    /// Query parameters
    pub params: Option<Params>,
    /// JSON body for mutating calls
    pub body: Option<Value>,
    /// Extra headers, the authorization header included once attached
    pub headers: BTreeMap<String, String>,
    /// Cache key remembered by the pre-flight stage for the response stage
    pub cache_key: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: None,
            body: None,
            headers: BTreeMap::new(),
            cache_key: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Serialises any value into query parameters.
    ///
    /// The value must serialise to a JSON object (or null for no parameters).
    pub fn with_query<T: Serialize>(mut self, query: &T) -> Result<Self> {
        match serde_json::to_value(query).map_err(|e| ApiError::InvalidRequest(e.to_string()))? {
            Value::Object(map) => self.params = Some(map),
            Value::Null => self.params = None,
            other => {
                return Err(ApiError::InvalidRequest(format!(
                    "query parameters must be an object, got {}",
                    other
                )))
            }
        }
        Ok(self)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Cache key for this request's path and parameters.
    pub fn derive_cache_key(&self) -> String {
        cache_key(&self.path, self.params.as_ref())
    }
}
