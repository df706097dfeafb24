use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use url::form_urlencoded;

use crate::domain::Params;
use crate::http::HttpRequest;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shallow merge; later maps override earlier ones key by key.
pub fn merge_params<'a, I>(maps: I) -> Params
where
    I: IntoIterator<Item = &'a Params>,
{
    let mut merged = Params::new();
    for map in maps {
        merged.extend(map.iter());
    }
    merged
}

/// Percent-encode `params` as a form body, keys in order, blank values dropped.
pub fn encode_form(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter().filter(|(_, value)| !value.is_empty()) {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

pub fn encode_form_request(url: String, params: &Params, user_agent: &HeaderValue) -> HttpRequest {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    headers.insert(USER_AGENT, user_agent.clone());

    HttpRequest {
        method: reqwest::Method::POST,
        url,
        headers,
        body: encode_form(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_maps_override_earlier_ones() {
        let defaults = Params::from([("blog", "http://example.com"), ("is_test", "1")]);
        let supplied = Params::from([("blog", "http://other.example"), ("user_ip", "10.0.0.1")]);

        let merged = merge_params([&defaults, &supplied]);
        assert_eq!(merged.get("blog"), Some("http://other.example"));
        assert_eq!(merged.get("is_test"), Some("1"));
        assert_eq!(merged.get("user_ip"), Some("10.0.0.1"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn empty_supplied_params_leave_just_the_default_site() {
        let defaults = Params::from([("blog", "http://example.com")]);
        let merged = merge_params([&defaults, &Params::new()]);

        assert_eq!(merged.len(), 1);
        assert_eq!(encode_form(&merged), "blog=http%3A%2F%2Fexample.com");
    }

    #[test]
    fn encodes_sorted_and_skips_blank_values() {
        let params = Params::from([
            ("user_ip", "10.0.0.1"),
            ("comment_author", ""),
            ("blog", "http://example.com"),
            ("comment_content", "Hi there & bye"),
        ]);
        assert_eq!(
            encode_form(&params),
            "blog=http%3A%2F%2Fexample.com&comment_content=Hi+there+%26+bye&user_ip=10.0.0.1"
        );
    }

    #[test]
    fn empty_params_encode_to_empty_body() {
        assert_eq!(encode_form(&Params::new()), "");
        assert_eq!(encode_form(&Params::from([("blog", "")])), "");
    }

    #[test]
    fn encoded_form_decodes_back_to_the_same_pairs() {
        let params = Params::from([
            ("comment_content", "Ünïcödé <b>html</b> 100% = true?"),
            ("comment_author_email", "a+b@example.com"),
            ("permalink", "http://example.com/?p=1&q=2"),
            ("blank", ""),
        ]);

        let decoded = form_urlencoded::parse(encode_form(&params).as_bytes())
            .into_owned()
            .collect::<Params>();

        let mut expected = params.clone();
        expected.remove("blank");
        assert_eq!(decoded, expected);
    }

    #[test]
    fn request_is_a_form_post_with_user_agent() {
        let request = encode_form_request(
            "https://rest.akismet.com/1.1/verify-key".to_owned(),
            &Params::from([("key", "ABC123")]),
            &HeaderValue::from_static("akismet-rs/0.1.0"),
        );

        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), FORM_CONTENT_TYPE);
        assert_eq!(request.headers.get(USER_AGENT).unwrap(), "akismet-rs/0.1.0");
        assert_eq!(request.body, "key=ABC123");
    }
}
