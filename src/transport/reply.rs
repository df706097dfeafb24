use reqwest::StatusCode;

use crate::http::HttpResponse;

const HEADER_DEBUG_HELP: &str = "X-Akismet-Debug-Help";

/// Akismet answered, but not with what the method promises on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The body, or `Status <code> <reason>` for non-200 responses.
    pub response: String,
    /// `X-Akismet-Debug-Help`, when present and non-blank.
    pub hint: Option<String>,
}

impl Rejection {
    fn new(response: String, reply: &HttpResponse) -> Self {
        let hint = reply
            .header(HEADER_DEBUG_HELP)
            .map(|hint| hint.trim().to_owned())
            .filter(|hint| !hint.is_empty());
        Self { response, hint }
    }

    pub fn unexpected_body(reply: &HttpResponse) -> Self {
        Self::new(reply.body.clone(), reply)
    }
}

/// The body of a `200 OK` reply; anything else is a rejection regardless of body.
pub fn accepted_body(reply: &HttpResponse) -> Result<&str, Rejection> {
    if reply.status != StatusCode::OK {
        return Err(Rejection::new(format!("Status {}", reply.status), reply));
    }
    Ok(reply.body.as_str())
}
