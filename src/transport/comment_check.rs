use crate::domain::SpamStatus;
use crate::http::HttpResponse;
use crate::transport::reply::{Rejection, accepted_body};

const HAM: &str = "false";
const SPAM: &str = "true";

const HEADER_PRO_TIP: &str = "X-Akismet-Pro-Tip";
const PRO_TIP_DISCARD: &str = "discard";

pub fn decode_comment_check_response(reply: &HttpResponse) -> Result<SpamStatus, Rejection> {
    match accepted_body(reply)? {
        HAM => Ok(SpamStatus::Ham),
        SPAM if reply.header(HEADER_PRO_TIP).as_deref() == Some(PRO_TIP_DISCARD) => {
            Ok(SpamStatus::DefiniteSpam)
        }
        SPAM => Ok(SpamStatus::ProbableSpam),
        _ => Err(Rejection::unexpected_body(reply)),
    }
}
