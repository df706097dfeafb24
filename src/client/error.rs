use std::error::Error as StdError;
use std::fmt;

use crate::domain::ValidationError;
use crate::http::HeaderError;
use crate::transport::{Method, Rejection};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Checker`](crate::Checker).
///
/// Every failure surfaces exactly once, to the immediate caller. The client
/// never retries and never logs an error it returns.
pub enum AkismetError {
    /// HTTP transport failure (DNS, TLS, timeouts, a failing decorator, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Akismet did not verify the key + site pair.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Akismet answered a check or report call with something unexpected.
    #[error(transparent)]
    Call(#[from] CallError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A configured header name or value is not valid HTTP.
    #[error(transparent)]
    InvalidHeader(#[from] HeaderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An unexpected reply to an Akismet method.
///
/// Typically this means the request lacked something the service requires,
/// e.g. the commenter's IP address.
pub struct CallError {
    /// The method that was called.
    pub method: Method,
    /// The reply body, or `Status <code> <reason>` for non-200 replies.
    pub response: String,
    /// Diagnostic hint from the `X-Akismet-Debug-Help` header.
    pub hint: Option<String>,
}

impl CallError {
    pub(crate) fn new(method: Method, rejection: Rejection) -> Self {
        Self {
            method,
            response: rejection.response,
            hint: rejection.hint,
        }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} returned ", self.method)?;
        if self.response.trim().is_empty() {
            f.write_str("an empty string")?;
        } else {
            write!(f, "\"{}\"", self.response)?;
        }
        let hint = self.hint.as_deref().unwrap_or(self.method.expectation());
        write!(f, " ({hint})")
    }
}

impl StdError for CallError {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Akismet refused to verify a key for a site.
///
/// The checker stays usable: the next call tries verification again.
pub struct KeyError {
    pub key: String,
    pub site: String,
    /// The reply body, or `Status <code> <reason>` for non-200 replies.
    pub response: String,
    /// Diagnostic hint from the `X-Akismet-Debug-Help` header.
    pub hint: Option<String>,
}

impl KeyError {
    pub(crate) fn new(key: &str, site: &str, rejection: Rejection) -> Self {
        Self {
            key: key.to_owned(),
            site: site.to_owned(),
            response: rejection.response,
            hint: rejection.hint,
        }
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let call = CallError {
            method: Method::VerifyKey,
            response: self.response.clone(),
            hint: self.hint.clone(),
        };
        write!(f, "key {} not verified for {}: {call}", self.key, self.site)
    }
}

impl StdError for KeyError {}
