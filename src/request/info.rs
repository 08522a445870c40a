//! Request capability trait and parameter value type.
//!
//! # Responsibilities
//! - Define the minimal request contract the accessors depend on
//! - Carry submitted parameter values with their undecoded bytes
//!
//! # Design Decisions
//! - Parameter name lookup is case-sensitive; header lookup is not
//! - Multi-valued parameters preserve request-supplied order
//! - Decoding raw bytes is fallible and explicit; callers that want the
//!   swallow-to-empty behavior go through the accessor layer

use crate::accessor::error::ValueError;

/// One submitted parameter: a plain form field or an uploaded part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameter {
    name: String,
    raw: Vec<u8>,
    form_field: bool,
    content_type: Option<String>,
}

impl RequestParameter {
    /// A plain form field carrying an already-decoded string value.
    pub fn form(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: value.into().into_bytes(),
            form_field: true,
            content_type: None,
        }
    }

    /// An uploaded part carrying raw bytes and an optional content type.
    pub fn upload(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw: bytes.into(),
            form_field: false,
            content_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_form_field(&self) -> bool {
        self.form_field
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Strict UTF-8 decode of the raw bytes.
    pub fn string_value(&self) -> Result<&str, ValueError> {
        std::str::from_utf8(&self.raw).map_err(ValueError::from)
    }

    /// Decoded value when the bytes are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.raw).ok()
    }

    /// Decoded value, or the empty string when decoding fails.
    /// Decode failures are logged at debug level and never surfaced.
    pub fn string_value_or_empty(&self) -> String {
        match self.string_value() {
            Ok(value) => value.to_string(),
            Err(_) => {
                tracing::debug!(name = %self.name, "Parameter bytes are not valid UTF-8");
                String::new()
            }
        }
    }
}

/// Minimal request contract for the accessor functions.
///
/// Implemented by [`crate::request::http::HttpRequestInfo`] for axum
/// requests and by test fakes. The accessors never retain a borrow past
/// the call and never mutate the request.
pub trait RequestInfo {
    /// First value submitted under `name`, if any.
    fn parameter(&self, name: &str) -> Option<&RequestParameter>;

    /// All values submitted under `name`, in request order.
    /// Empty when the parameter is absent.
    fn parameter_values(&self, name: &str) -> Vec<&RequestParameter>;

    /// Path selectors, in request-supplied order.
    fn selectors(&self) -> &[String];

    /// Decoded request path.
    fn path(&self) -> &str;

    /// Full request URL without the query string (`scheme://host/path`).
    fn url(&self) -> &str;

    /// Raw query string, `None` when the request carries none.
    fn query_string(&self) -> Option<&str>;

    /// First value of the named header; name match is case-insensitive.
    fn header(&self, name: &str) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_decodes_to_its_value() {
        let param = RequestParameter::form("title", "Hello");
        assert_eq!(param.string_value().unwrap(), "Hello");
        assert_eq!(param.string_value_or_empty(), "Hello");
        assert!(param.is_form_field());
    }

    #[test]
    fn invalid_utf8_is_swallowed_to_empty() {
        let param = RequestParameter::upload("file", vec![0xff, 0xfe], None);
        assert!(param.string_value().is_err());
        assert_eq!(param.as_str(), None);
        assert_eq!(param.string_value_or_empty(), "");
    }

    #[test]
    fn upload_keeps_content_type() {
        let param = RequestParameter::upload("file", b"data".to_vec(), Some("text/plain".into()));
        assert_eq!(param.content_type(), Some("text/plain"));
        assert!(!param.is_form_field());
    }
}
