use std::fmt;

use crate::domain::ApiKey;

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_HOST: &str = "rest.akismet.com";
const DEFAULT_VERSION: &str = "1.1";

/// The Akismet REST methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    VerifyKey,
    CommentCheck,
    SubmitSpam,
    SubmitHam,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VerifyKey => "verify-key",
            Self::CommentCheck => "comment-check",
            Self::SubmitSpam => "submit-spam",
            Self::SubmitHam => "submit-ham",
        }
    }

    /// Whether the host is prefixed with the API key. Akismet scopes usage to
    /// the key in the host name, so every method except key verification is.
    pub fn is_key_qualified(self) -> bool {
        !matches!(self, Self::VerifyKey)
    }

    /// What a successful response looks like, for error messages.
    pub(crate) fn expectation(self) -> &'static str {
        match self {
            Self::VerifyKey => "expected valid",
            Self::CommentCheck => "expected true or false",
            Self::SubmitSpam | Self::SubmitHam => "expected a thank you message",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where Akismet lives: `scheme://[key.]host/version/method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    scheme: String,
    host: String,
    version: String,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
        }
    }
}

impl ApiEndpoint {
    /// Point at another host (and port), e.g. a local stand-in during tests.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Override the API version path segment.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// URL for `method`, qualified with `key` when the method requires it.
    pub fn url(&self, method: Method, key: &ApiKey) -> String {
        if method.is_key_qualified() {
            format!(
                "{}://{}.{}/{}/{}",
                self.scheme,
                key.as_str(),
                self.host,
                self.version,
                method
            )
        } else {
            format!(
                "{}://{}/{}/{}",
                self.scheme, self.host, self.version, method
            )
        }
    }
}
