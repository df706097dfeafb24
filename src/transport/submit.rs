use crate::http::HttpResponse;
use crate::transport::reply::{Rejection, accepted_body};

const REPORTED: &str = "Thanks for making the web a better place.";

/// Shared by `submit-spam` and `submit-ham`.
pub fn decode_submit_response(reply: &HttpResponse) -> Result<(), Rejection> {
    match accepted_body(reply)? {
        REPORTED => Ok(()),
        _ => Err(Rejection::unexpected_body(reply)),
    }
}
