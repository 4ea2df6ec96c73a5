//! Endpoint descriptors.
//!
//! An [`Endpoint`] is everything one panel call needs besides the API root
//! and the key: method, path segments, query pairs, body and the content type
//! the response is expected to carry.

use reqwest::Method;
use serde_json::Value;

use crate::error::{McsmError, Result};

/// Response content type a call expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Json,
    PlainText,
}

impl ContentType {
    /// MIME essence as sent by the panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::PlainText => "text/plain",
        }
    }

    /// Whether a `Content-Type` header value matches this type.
    ///
    /// Parameters such as `charset` are ignored.
    pub fn matches(&self, header: &str) -> bool {
        let essence = header.split(';').next().unwrap_or_default().trim();
        essence.eq_ignore_ascii_case(self.as_str())
    }
}

/// Request body placement.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    #[default]
    None,
    Json(Value),
    Form(Vec<(String, String)>),
}

/// One panel call, minus origin and key.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub segments: Vec<&'static str>,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub expect: ContentType,
}

impl Endpoint {
    /// Build a GET endpoint under the API root.
    pub fn new(segments: &[&'static str]) -> Self {
        Self {
            method: Method::GET,
            segments: segments.to_vec(),
            query: Vec::new(),
            body: Body::None,
            expect: ContentType::Json,
        }
    }

    pub fn get(segments: &[&'static str]) -> Self {
        Self::new(segments)
    }

    pub fn post(segments: &[&'static str]) -> Self {
        Self::new(segments).method(Method::POST)
    }

    pub fn put(segments: &[&'static str]) -> Self {
        Self::new(segments).method(Method::PUT)
    }

    pub fn delete(segments: &[&'static str]) -> Self {
        Self::new(segments).method(Method::DELETE)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append an identifier query parameter, rejecting empty values.
    pub fn id(self, key: &str, value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(McsmError::InvalidInput(format!("{} must not be empty", key)));
        }
        Ok(self.query(key, value))
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    /// Attach a form-encoded body built from a flat JSON object.
    pub fn form(mut self, data: &Value) -> Result<Self> {
        self.body = Body::Form(form_pairs(data)?);
        Ok(self)
    }

    pub fn expect(mut self, content_type: ContentType) -> Self {
        self.expect = content_type;
        self
    }

    /// Path relative to the API root, for logging.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Flatten a JSON object of scalars into form pairs.
fn form_pairs(data: &Value) -> Result<Vec<(String, String)>> {
    let map = data
        .as_object()
        .ok_or_else(|| McsmError::InvalidInput("form body must be a JSON object".into()))?;

    map.iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Bool(_) | Value::Number(_) => value.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(McsmError::InvalidInput(format!(
                        "form field '{}' must be a scalar",
                        key
                    )))
                }
            };
            Ok((key.clone(), text))
        })
        .collect()
}
