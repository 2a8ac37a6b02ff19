//! Request correlation IDs.
//!
//! Every outbound request carries an `x-request-id` so backend logs can be
//! matched against client logs.

use std::fmt;

use uuid::Uuid;

/// Header name used for request correlation.
pub const X_REQUEST_ID: &str = "x-request-id";

/// A unique request identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Extension for attaching a request ID to a reqwest builder.
pub trait RequestIdExt {
    fn with_request_id(self, id: RequestId) -> Self;
}

impl RequestIdExt for reqwest::RequestBuilder {
    fn with_request_id(self, id: RequestId) -> Self {
        self.header(X_REQUEST_ID, id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let id = RequestId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(Uuid::parse_str(&text).unwrap(), *id.as_uuid());
    }
}
