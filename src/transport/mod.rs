//! Transport layer: endpoints and wire-format details (form encoding, reply literals).

mod comment_check;
mod endpoint;
mod form;
mod reply;
mod submit;
mod verify_key;

pub use comment_check::decode_comment_check_response;
pub use endpoint::{ApiEndpoint, Method};
pub use form::{encode_form_request, merge_params};
pub use reply::Rejection;
pub use submit::decode_submit_response;
pub use verify_key::decode_verify_key_response;
