use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};

use crate::http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("invalid HTTP header name: {0}")]
    Name(#[from] InvalidHeaderName),

    #[error("invalid HTTP header value: {0}")]
    Value(#[from] InvalidHeaderValue),
}

/// Build a [`HeaderMap`] from string pairs. Later pairs replace earlier ones
/// with the same (case-insensitive) name.
pub fn header_map<I, K, V>(pairs: I) -> Result<HeaderMap, HeaderError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.insert(
            HeaderName::from_bytes(name.as_ref().as_bytes())?,
            HeaderValue::from_str(value.as_ref())?,
        );
    }
    Ok(headers)
}

/// Decorator that sets a fixed group of headers on every request, replacing
/// any value already present, then delegates to the wrapped transport.
///
/// When several `SetHeaders` are chained, the one closest to the real
/// transport runs last and its values are the ones sent.
pub struct SetHeaders {
    inner: Arc<dyn HttpTransport>,
    headers: HeaderMap,
}

impl SetHeaders {
    pub fn new(inner: Arc<dyn HttpTransport>, headers: HeaderMap) -> Self {
        Self { inner, headers }
    }

    pub fn from_pairs<I, K, V>(inner: Arc<dyn HttpTransport>, pairs: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Ok(Self::new(inner, header_map(pairs)?))
    }
}

impl HttpTransport for SetHeaders {
    fn execute<'a>(
        &'a self,
        mut request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        for (name, value) in &self.headers {
            request.headers.insert(name.clone(), value.clone());
        }
        self.inner.execute(request)
    }
}
