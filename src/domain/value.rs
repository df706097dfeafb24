use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Akismet API key.
///
/// Akismet treats the key as opaque. This type is stricter: it must be
/// non-empty after trimming and made only of ASCII letters, digits or `-`.
/// The key becomes the leftmost label of the host name for every
/// authenticated call, so anything else would change which host is contacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Akismet (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(ValidationError::InvalidApiKey {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Homepage URL of the website the key is registered for (`blog`).
///
/// Invariant: non-empty after trimming. The value is otherwise opaque; Akismet
/// does its own matching against the registered site.
pub struct SiteUrl(String);

impl SiteUrl {
    /// Form field name used by Akismet (`blog`).
    pub const FIELD: &'static str = "blog";

    /// Create a validated [`SiteUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated site URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The key + site pair a [`Checker`](crate::Checker) is bound to for its whole lifetime.
pub struct Credentials {
    key: ApiKey,
    site: SiteUrl,
}

impl Credentials {
    /// Validate and pair an API key with its registered website.
    pub fn new(key: impl Into<String>, site: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            key: ApiKey::new(key)?,
            site: SiteUrl::new(site)?,
        })
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    pub fn site(&self) -> &SiteUrl {
        &self.site
    }
}
