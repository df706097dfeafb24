//! HTTP layer: the pluggable transport every Akismet call goes through.
//!
//! [`HttpTransport`] has a single operation, executing one request. The
//! built-in implementation is [`ReqwestTransport`]; decorators such as
//! [`SetHeaders`] and [`DumpTransport`] wrap another transport and add
//! behavior around delegation. [`adapt`] folds a list of [`Adapter`]s over a
//! base transport to build a chain.

mod chain;
mod dump;
mod headers;

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
pub use reqwest::{Method, StatusCode};

pub use chain::{Adapter, adapt, with_dump, with_header, with_headers};
pub use dump::DumpTransport;
pub use headers::{HeaderError, SetHeaders, header_map};

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A fully formed outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

/// Status, headers and body of a received response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// A response with no headers.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Add a header; intended for test doubles. `name` must be lowercase.
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
        self
    }

    /// Header value as text; bytes that are not UTF-8 are replaced.
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

/// Executes HTTP requests on behalf of a [`Checker`](crate::Checker).
///
/// Implementations own timeout and retry policy; the checker adds none.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(&'a self, request: HttpRequest)
    -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

/// Transport backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .request(request.method, &request.url)
                .headers(request.headers)
                .body(request.body)
                .send()
                .await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

/// Turns an async function into an [`HttpTransport`].
///
/// Handy for small decorators and test doubles that don't warrant a type of
/// their own:
///
/// ```rust
/// use akismet::http::{BoxError, HttpRequest, HttpResponse, StatusCode, TransportFn};
///
/// let always_ham = TransportFn::new(|_request: HttpRequest| async {
///     Ok::<_, BoxError>(HttpResponse::new(StatusCode::OK, "false"))
/// });
/// # let _ = always_ham;
/// ```
pub struct TransportFn<F>(F);

impl<F> TransportFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for TransportFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransportFn(..)")
    }
}

impl<F, Fut> HttpTransport for TransportFn<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, BoxError>> + Send + 'static,
{
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin((self.0)(request))
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn response_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(StatusCode::OK, "true")
            .with_header("x-akismet-pro-tip", "discard");
        assert_eq!(response.header("X-Akismet-Pro-Tip").as_deref(), Some("discard"));
        assert_eq!(response.header("X-Akismet-Debug-Help"), None);
    }

    #[tokio::test]
    async fn transport_fn_calls_the_wrapped_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let transport = TransportFn::new(move |request: HttpRequest| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, BoxError>(HttpResponse::new(StatusCode::OK, request.url)) }
        });

        let response = transport.execute(testing::request()).await.unwrap();
        assert_eq!(response.body, "https://rest.akismet.com/1.1/verify-key");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_fn_propagates_errors() {
        let transport = TransportFn::new(|_request: HttpRequest| async {
            Err::<HttpResponse, BoxError>("connection refused".into())
        });
        let err = transport.execute(testing::request()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
