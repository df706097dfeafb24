use crate::http::HttpResponse;
use crate::transport::reply::{Rejection, accepted_body};

const VERIFIED: &str = "valid";

pub fn decode_verify_key_response(reply: &HttpResponse) -> Result<(), Rejection> {
    match accepted_body(reply)? {
        VERIFIED => Ok(()),
        _ => Err(Rejection::unexpected_body(reply)),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn valid_verifies() {
        let reply = HttpResponse::new(StatusCode::OK, "valid");
        assert_eq!(decode_verify_key_response(&reply), Ok(()));
    }

    #[test]
    fn invalid_is_rejected_with_hint() {
        let reply = HttpResponse::new(StatusCode::OK, "invalid")
            .with_header("x-akismet-debug-help", "bad key");
        assert_eq!(
            decode_verify_key_response(&reply),
            Err(Rejection {
                response: "invalid".to_owned(),
                hint: Some("bad key".to_owned()),
            })
        );
    }

    #[test]
    fn match_is_exact() {
        for body in ["Valid", "valid\n", " valid", ""] {
            let reply = HttpResponse::new(StatusCode::OK, body);
            assert!(decode_verify_key_response(&reply).is_err(), "{body:?} verified");
        }
    }
}
