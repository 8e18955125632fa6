// ── Core error types ──
//
// Decode and selection failures are returned as values so the caller can
// pick an empty state, a retry prompt, or keep the previous feed.
// `CoreError` is the user-facing union; the `From<slider_api::Error>` impl
// translates transport failures into domain-appropriate variants.

use std::fmt;

use thiserror::Error;

/// Where in the payload a required field was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContext {
    /// The top-level response object.
    Root,
    /// The category at `index` in the `TOVARY` list.
    Category { index: usize },
    /// Product `index` inside category `category`.
    Product { category: usize, index: usize },
}

impl fmt::Display for FieldContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("response"),
            Self::Category { index } => write!(f, "category #{index}"),
            Self::Product { category, index } => {
                write!(f, "product #{index} of category #{category}")
            }
        }
    }
}

/// Failure to turn a raw payload into a [`Feed`](crate::Feed).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The bytes are not valid JSON.
    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },

    /// A required field is absent or has the wrong type.
    #[error("Missing or invalid field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: FieldContext,
    },
}

impl DecodeError {
    pub(crate) fn missing(field: &'static str, context: FieldContext) -> Self {
        Self::MissingField { field, context }
    }

    /// The offending field name, for `MissingField`.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::MalformedPayload { .. } => None,
        }
    }
}

/// Rejected category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Category index {index} is out of range (have {len} categories)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network ──────────────────────────────────────────────────────
    #[error("Cannot reach feed at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Feed request timed out")]
    Timeout,

    #[error("Feed endpoint returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Invalid image path {path:?}: {reason}")]
    InvalidImagePath { path: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for failures a later refresh might not hit.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<slider_api::Error> for CoreError {
    fn from(err: slider_api::Error) -> Self {
        match err {
            slider_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if let Some(status) = e.status() {
                    CoreError::Http {
                        status: status.as_u16(),
                        message: e.to_string(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            slider_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            slider_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            slider_api::Error::Http {
                status,
                body_preview,
            } => CoreError::Http {
                status,
                message: body_preview,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_location() {
        let err = DecodeError::missing("ID", FieldContext::Product { category: 1, index: 3 });
        assert_eq!(
            err.to_string(),
            "Missing or invalid field `ID` in product #3 of category #1"
        );
        assert_eq!(err.field(), Some("ID"));
    }

    #[test]
    fn api_http_error_maps_to_http() {
        let err: CoreError = slider_api::Error::Http {
            status: 503,
            body_preview: "busy".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Http { status: 503, .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn api_tls_error_maps_to_connection_failed() {
        let err: CoreError = slider_api::Error::Tls("no roots".into()).into();
        assert!(matches!(err, CoreError::ConnectionFailed { ref reason, .. } if reason.contains("no roots")));
    }

    #[test]
    fn decode_error_is_not_transient() {
        let err: CoreError = DecodeError::missing("status", FieldContext::Root).into();
        assert!(!err.is_transient());
    }
}
