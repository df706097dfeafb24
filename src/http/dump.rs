use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use reqwest::header::HeaderMap;

use crate::http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

/// Decorator that writes a textual dump of every request and response to a
/// sink, for development and debugging.
///
/// Requests and responses pass through unchanged. A failed write to the sink
/// fails the call, so nothing is ever dropped from the dump silently.
pub struct DumpTransport<W> {
    inner: Arc<dyn HttpTransport>,
    sink: Arc<Mutex<W>>,
}

impl<W: Write + Send> DumpTransport<W> {
    pub fn new(inner: Arc<dyn HttpTransport>, sink: Arc<Mutex<W>>) -> Self {
        Self { inner, sink }
    }

    fn write_request(&self, request: &HttpRequest) -> io::Result<()> {
        let mut sink = self.lock()?;
        write!(sink, "\n\n[REQUEST]\n{} {} HTTP/1.1\n", request.method, request.url)?;
        write_headers(&mut *sink, &request.headers)?;
        write!(sink, "\n{}", request.body)?;
        sink.flush()
    }

    fn write_response(&self, response: &HttpResponse) -> io::Result<()> {
        let mut sink = self.lock()?;
        write!(sink, "\n\n[RESPONSE]\nHTTP/1.1 {}\n", response.status)?;
        write_headers(&mut *sink, &response.headers)?;
        write!(sink, "\n{}", response.body)?;
        sink.flush()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, W>> {
        self.sink
            .lock()
            .map_err(|_| io::Error::other("dump sink lock poisoned"))
    }
}

fn write_headers(sink: &mut impl Write, headers: &HeaderMap) -> io::Result<()> {
    for (name, value) in headers {
        writeln!(sink, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()))?;
    }
    Ok(())
}

impl<W: Write + Send> HttpTransport for DumpTransport<W> {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            self.write_request(&request)?;
            let response = self.inner.execute(request).await?;
            self.write_response(&response)?;
            Ok(response)
        })
    }
}
