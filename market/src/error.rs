//! Error taxonomy for REST calls.
//!
//! Every failed request lands in exactly one [`ApiError`] variant. The UI
//! only needs to distinguish "session is gone" (401) from everything else,
//! which is surfaced as a dismissible notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Classified REST failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// HTTP 401; the stored token is no longer valid.
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    /// Non-2xx response carrying a JSON error message.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Non-2xx response without a usable JSON body.
    #[error("server error ({status})")]
    Server { status: u16 },
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match serde_json::from_str::<Value>(body).ok().as_ref().and_then(error_message) {
            Some(message) => Self::Http { status, message },
            None => Self::Server { status },
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Http { status, .. } | Self::Server { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Pull a human message out of the error body shapes the backend uses:
/// `{ "message" }`, `{ "error" }`, or validator-style `{ "errors": [{ "msg" }] }`.
fn error_message(body: &Value) -> Option<String> {
    let text = |v: Option<&Value>| v.and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty()).map(ToOwned::to_owned);

    text(body.get("message"))
        .or_else(|| text(body.get("error")))
        .or_else(|| {
            let first = body.get("errors")?.as_array()?.first()?;
            text(first.get("msg")).or_else(|| text(first.get("message")))
        })
}

/// Turn a completed response into `T` or a classified error.
///
/// An empty 2xx body decodes as JSON `null`, so `()` and `Option<T>` targets
/// work for `204 No Content`.
///
/// # Errors
///
/// Returns [`ApiError::from_status`] for non-2xx statuses and
/// [`ApiError::Decode`] when a 2xx body does not deserialize into `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
