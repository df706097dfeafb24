//! Client layer: gates every call behind key verification and maps replies to results.

mod error;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderValue;
use tokio::sync::OnceCell;

use crate::domain::{ApiKey, Credentials, Params, SiteUrl, SpamStatus};
use crate::http::{Adapter, HeaderError, HttpResponse, HttpTransport, ReqwestTransport, adapt};
use crate::transport::{
    ApiEndpoint, Method, decode_comment_check_response, decode_submit_response,
    decode_verify_key_response, encode_form_request, merge_params,
};

pub use error::{AkismetError, CallError, KeyError};

/// Identifies this library to Akismet in the `User-Agent` header.
pub const USER_AGENT: &str = concat!("akismet-rs/", env!("CARGO_PKG_VERSION"));

const IS_TEST: &str = "is_test";

/// Builder for [`Checker`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or
/// transport, or to wrap the transport in decorators.
pub struct CheckerBuilder {
    credentials: Credentials,
    endpoint: ApiEndpoint,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    test_mode: bool,
    transport: Option<Arc<dyn HttpTransport>>,
    adapters: Vec<Adapter>,
}

impl CheckerBuilder {
    /// Create a builder with the default endpoint and no overrides.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: ApiEndpoint::default(),
            timeout: None,
            user_agent: None,
            test_mode: false,
            transport: None,
            adapters: Vec::new(),
        }
    }

    /// Override the Akismet endpoint (scheme, host, API version).
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Only used by the built-in transport; a custom [`transport`](Self::transport)
    /// brings its own policy.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Name your application, preferably as `name/version`. It is sent ahead
    /// of the library's own agent: `MyApp/1.0 | akismet-rs/0.1.0`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// In test mode every check and report carries `is_test=1`, so Akismet
    /// does not learn from the calls. Callers may still set `is_test` themselves.
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    /// Replace the built-in reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Wrap the transport in one more decorator. Adapters see requests in the
    /// order they are added (see [`adapt`]).
    pub fn adapter(mut self, adapter: Adapter) -> Self {
        self.adapters.push(adapter);
        self
    }

    /// Build a [`Checker`].
    pub fn build(self) -> Result<Checker, AkismetError> {
        let user_agent = match self.user_agent.as_deref().map(str::trim) {
            Some(app) if !app.is_empty() => format!("{app} | {USER_AGENT}"),
            _ => USER_AGENT.to_owned(),
        };
        let user_agent = HeaderValue::from_str(&user_agent).map_err(HeaderError::from)?;

        let base: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| AkismetError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(Checker {
            credentials: self.credentials,
            endpoint: self.endpoint,
            user_agent,
            test_mode: self.test_mode,
            http: adapt(base, self.adapters),
            verified: OnceCell::new(),
        })
    }
}

/// Spam checking and reporting through the Akismet API.
///
/// A checker is bound to one key + site pair. The pair is verified with
/// Akismet on the first call to any method; once verified it stays verified
/// for the checker's lifetime. A failed verification is not remembered, so
/// the next call tries again.
///
/// Concurrent first calls share a single verification request. The checker
/// is `Send + Sync`; share it behind an [`Arc`].
///
/// Every call sends the verified site as `blog` unless the caller's
/// parameters set `blog` themselves.
pub struct Checker {
    credentials: Credentials,
    endpoint: ApiEndpoint,
    user_agent: HeaderValue,
    test_mode: bool,
    http: Arc<dyn HttpTransport>,
    verified: OnceCell<()>,
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("test_mode", &self.test_mode)
            .field("verified", &self.is_verified())
            .finish_non_exhaustive()
    }
}

impl Checker {
    /// Create a checker using the default endpoint and HTTP client.
    ///
    /// For more customization, use [`Checker::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: ApiEndpoint::default(),
            user_agent: HeaderValue::from_static(USER_AGENT),
            test_mode: false,
            http: Arc::new(ReqwestTransport::default()),
            verified: OnceCell::new(),
        }
    }

    /// Start building a checker with custom settings.
    pub fn builder(credentials: Credentials) -> CheckerBuilder {
        CheckerBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_verified(&self) -> bool {
        self.verified.initialized()
    }

    /// Verify the key + site pair now instead of on first use.
    ///
    /// Does nothing once verified. Errors:
    /// - [`AkismetError::Key`] when Akismet rejects the pair or replies with a
    ///   non-200 status,
    /// - [`AkismetError::Transport`] when the request could not be made.
    pub async fn verify(&self) -> Result<(), AkismetError> {
        self.verified.get_or_try_init(|| self.verify_key()).await?;
        Ok(())
    }

    /// Check content for spam. `params` are Akismet `comment-check` fields,
    /// built by hand or with [`Comment`](crate::Comment).
    ///
    /// Errors:
    /// - verification errors as in [`Checker::verify`],
    /// - [`AkismetError::Call`] for a non-200 status or a reply other than
    ///   `true`/`false`.
    pub async fn check(&self, params: &Params) -> Result<SpamStatus, AkismetError> {
        self.verify().await?;
        let reply = self.call(Method::CommentCheck, params).await?;
        decode_comment_check_response(&reply)
            .map_err(|rejection| CallError::new(Method::CommentCheck, rejection).into())
    }

    /// Tell Akismet about spam that [`Checker::check`] missed. Send as many of
    /// the originally checked values as possible.
    pub async fn report_spam(&self, params: &Params) -> Result<(), AkismetError> {
        self.report(Method::SubmitSpam, params).await
    }

    /// Tell Akismet about legitimate content that [`Checker::check`] flagged
    /// as spam. Send as many of the originally checked values as possible.
    pub async fn report_ham(&self, params: &Params) -> Result<(), AkismetError> {
        self.report(Method::SubmitHam, params).await
    }

    async fn report(&self, method: Method, params: &Params) -> Result<(), AkismetError> {
        assert!(
            matches!(method, Method::SubmitSpam | Method::SubmitHam),
            "{method} is not a report method"
        );

        self.verify().await?;
        let reply = self.call(method, params).await?;
        decode_submit_response(&reply).map_err(|rejection| CallError::new(method, rejection))?;
        Ok(())
    }

    async fn verify_key(&self) -> Result<(), AkismetError> {
        let key = self.credentials.key().as_str();
        let site = self.credentials.site().as_str();
        let params = Params::from([(ApiKey::FIELD, key), (SiteUrl::FIELD, site)]);

        let reply = self.call(Method::VerifyKey, &params).await?;
        decode_verify_key_response(&reply)
            .map_err(|rejection| KeyError::new(key, site, rejection))?;

        tracing::debug!(site, "akismet key verified");
        Ok(())
    }

    async fn call(&self, method: Method, params: &Params) -> Result<HttpResponse, AkismetError> {
        let mut defaults = Params::from([(SiteUrl::FIELD, self.credentials.site().as_str())]);
        if self.test_mode && method != Method::VerifyKey {
            defaults.insert(IS_TEST, "1");
        }
        let params = merge_params([&defaults, params]);

        let url = self.endpoint.url(method, self.credentials.key());
        let request = encode_form_request(url, &params, &self.user_agent);

        tracing::debug!(%method, "calling akismet");
        self.http
            .execute(request)
            .await
            .map_err(AkismetError::Transport)
    }
}
