use std::io::Write;
use std::sync::{Arc, Mutex};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::http::{DumpTransport, HttpTransport, SetHeaders};

/// Wraps a transport in another one that adds some behavior.
pub type Adapter = Box<dyn FnOnce(Arc<dyn HttpTransport>) -> Arc<dyn HttpTransport> + Send>;

/// Build a decorator chain around `base`.
///
/// Adapters are listed in the order a request flows through them: the first
/// one sees the request first, the last one hands it to `base`. Since every
/// decorator acts just before delegating, the last adapter has the final say
/// over what is sent.
pub fn adapt<I>(base: Arc<dyn HttpTransport>, adapters: I) -> Arc<dyn HttpTransport>
where
    I: IntoIterator<Item = Adapter>,
{
    let adapters = adapters.into_iter().collect::<Vec<_>>();
    adapters
        .into_iter()
        .rev()
        .fold(base, |transport, adapter| adapter(transport))
}

/// Adapter setting a single header on every request.
pub fn with_header(name: HeaderName, value: HeaderValue) -> Adapter {
    let mut headers = HeaderMap::new();
    headers.insert(name, value);
    with_headers(headers)
}

/// Adapter setting a group of headers on every request.
pub fn with_headers(headers: HeaderMap) -> Adapter {
    Box::new(move |inner| -> Arc<dyn HttpTransport> {
        Arc::new(SetHeaders::new(inner, headers))
    })
}

/// Adapter dumping every request and response to `sink`.
pub fn with_dump<W>(sink: Arc<Mutex<W>>) -> Adapter
where
    W: Write + Send + 'static,
{
    Box::new(move |inner| -> Arc<dyn HttpTransport> {
        Arc::new(DumpTransport::new(inner, sink))
    })
}
