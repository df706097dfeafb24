//! Domain layer: strong types with validation and invariants (no I/O).

mod params;
mod request;
mod response;
mod validation;
mod value;

pub use params::Params;
pub use request::Comment;
pub use response::SpamStatus;
pub use validation::ValidationError;
pub use value::{ApiKey, Credentials, SiteUrl};

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn api_key_rejects_characters_that_would_change_the_host() {
        for bad in ["abc.evil.com", "abc/def", "ab c", "key@host"] {
            assert!(
                matches!(ApiKey::new(bad), Err(ValidationError::InvalidApiKey { .. })),
                "{bad} was accepted"
            );
        }
        assert_eq!(ApiKey::new(" ABC-123 ").unwrap().as_str(), "ABC-123");
    }

    #[test]
    fn api_key_debug_does_not_leak_the_key() {
        let key = ApiKey::new("secret123").unwrap();
        assert!(!format!("{key:?}").contains("secret123"));
    }

    #[test]
    fn site_rejects_empty_and_trims() {
        assert!(matches!(
            SiteUrl::new(""),
            Err(ValidationError::Empty {
                field: SiteUrl::FIELD
            })
        ));
        assert_eq!(
            SiteUrl::new(" http://example.com ").unwrap().as_str(),
            "http://example.com"
        );
    }

    #[test]
    fn credentials_validate_both_parts() {
        assert!(Credentials::new("", "http://example.com").is_err());
        assert!(Credentials::new("ABC123", " ").is_err());

        let credentials = Credentials::new("ABC123", "http://example.com").unwrap();
        assert_eq!(credentials.key().as_str(), "ABC123");
        assert_eq!(credentials.site().as_str(), "http://example.com");
    }

    #[test]
    fn params_later_inserts_win() {
        let mut params = Params::from([("blog", "http://a.example"), ("user_ip", "10.0.0.1")]);
        let previous = params.insert("blog", "http://b.example");

        assert_eq!(previous.as_deref(), Some("http://a.example"));
        assert_eq!(params.get("blog"), Some("http://b.example"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn params_iterate_in_key_order() {
        let params: Params = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let keys = params.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn spam_status_defaults_to_unknown() {
        assert_eq!(SpamStatus::default(), SpamStatus::Unknown);
        assert!(SpamStatus::DefiniteSpam.is_spam());
        assert!(SpamStatus::ProbableSpam.is_spam());
        assert!(!SpamStatus::Ham.is_spam());
        assert_eq!(SpamStatus::ProbableSpam.to_string(), "Probable Spam");
    }

    #[test]
    fn empty_comment_has_no_params() {
        assert!(Comment::default().to_params().is_empty());
    }

    #[test]
    fn comment_maps_fields_to_akismet_names() {
        let comment = Comment {
            user_ip: "203.0.113.7".to_owned(),
            user_agent: "Mozilla/5.0".to_owned(),
            referrer: "https://www.google.com".to_owned(),
            page: "http://example.com/blog/post-1".to_owned(),
            kind: "comment".to_owned(),
            author: "A. Commenter".to_owned(),
            author_email: "commenter@example.com".to_owned(),
            author_url: "http://commenter.example".to_owned(),
            content: "Nice post".to_owned(),
            site: Some(SiteUrl::new("http://other.example").unwrap()),
            site_language: "en, fr_ca".to_owned(),
            site_charset: "UTF-8".to_owned(),
            ..Default::default()
        };

        let params = comment.to_params();
        assert_eq!(params.get("user_ip"), Some("203.0.113.7"));
        assert_eq!(params.get("user_agent"), Some("Mozilla/5.0"));
        assert_eq!(params.get("referrer"), Some("https://www.google.com"));
        assert_eq!(params.get("permalink"), Some("http://example.com/blog/post-1"));
        assert_eq!(params.get("comment_type"), Some("comment"));
        assert_eq!(params.get("comment_author"), Some("A. Commenter"));
        assert_eq!(params.get("comment_author_email"), Some("commenter@example.com"));
        assert_eq!(params.get("comment_author_url"), Some("http://commenter.example"));
        assert_eq!(params.get("comment_content"), Some("Nice post"));
        assert_eq!(params.get("blog"), Some("http://other.example"));
        assert_eq!(params.get("blog_lang"), Some("en, fr_ca"));
        assert_eq!(params.get("blog_charset"), Some("UTF-8"));
        assert_eq!(params.len(), 12);
    }

    #[test]
    fn comment_omits_blank_fields() {
        let comment = Comment {
            user_ip: "203.0.113.7".to_owned(),
            author: "   ".to_owned(),
            ..Default::default()
        };
        let params = comment.to_params();
        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("comment_author"));
    }

    #[test]
    fn comment_sends_values_untrimmed() {
        let comment = Comment {
            user_agent: " Mozilla/5.0 ".to_owned(),
            content: "    fn main() {}\n".to_owned(),
            ..Default::default()
        };
        let params = comment.to_params();
        assert_eq!(params.get("user_agent"), Some(" Mozilla/5.0 "));
        assert_eq!(params.get("comment_content"), Some("    fn main() {}\n"));
    }

    #[test]
    fn comment_formats_timestamps_as_utc_iso8601() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2016, 4, 18, 11, 30, 59).unwrap();
        let comment = Comment {
            timestamp: Some(local.with_timezone(&Utc)),
            page_timestamp: Some(Utc.with_ymd_and_hms(2015, 1, 2, 3, 4, 5).unwrap()),
            ..Default::default()
        };

        let params = comment.to_params();
        assert_eq!(params.get("comment_date_gmt"), Some("2016-04-18T09:30:59Z"));
        assert_eq!(
            params.get("comment_post_modified_gmt"),
            Some("2015-01-02T03:04:05Z")
        );
    }
}
