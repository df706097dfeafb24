use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::params::Params;
use crate::domain::value::SiteUrl;

const USER_IP: &str = "user_ip";
const USER_AGENT: &str = "user_agent";
// Akismet spells it correctly, unlike the HTTP header.
const REFERRER: &str = "referrer";
const PERMALINK: &str = "permalink";
const PAGE_TIMESTAMP: &str = "comment_post_modified_gmt";
const COMMENT_TYPE: &str = "comment_type";
const AUTHOR: &str = "comment_author";
const AUTHOR_EMAIL: &str = "comment_author_email";
const AUTHOR_URL: &str = "comment_author_url";
const CONTENT: &str = "comment_content";
const TIMESTAMP: &str = "comment_date_gmt";
const SITE_LANGUAGE: &str = "blog_lang";
const SITE_CHARSET: &str = "blog_charset";

/// A piece of user-generated content to check, such as a blog comment or a
/// forum post.
///
/// Using `Comment` is optional: it only produces the [`Params`] the
/// [`Checker`](crate::Checker) methods take. Blank fields are left out of
/// the payload. Provide as much as you can; the more Akismet knows, the
/// better the verdict.
///
/// ```rust
/// use akismet::Comment;
///
/// let comment = Comment {
///     user_ip: "203.0.113.7".to_owned(),
///     author: "A. Commenter".to_owned(),
///     content: "I love Cinco de Mayo!".to_owned(),
///     ..Default::default()
/// };
/// assert_eq!(comment.to_params().get("user_ip"), Some("203.0.113.7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// IP address of the commenter. Required by the service.
    pub user_ip: String,
    /// User agent of the commenter's browser.
    pub user_agent: String,
    /// The `Referer` header sent by the commenter's browser.
    pub referrer: String,
    /// URL of the page the comment was posted on.
    pub page: String,
    /// Publish time of the page the comment was posted on.
    pub page_timestamp: Option<DateTime<Utc>>,
    /// Content type, e.g. `comment`, `forum-post`, `contact-form`.
    pub kind: String,
    pub author: String,
    pub author_email: String,
    /// Website submitted by the commenter.
    pub author_url: String,
    /// Body of the comment. May contain HTML.
    pub content: String,
    /// Creation time of the comment. Akismet uses the time of the call when absent.
    pub timestamp: Option<DateTime<Utc>>,
    /// Overrides the site the checker was verified for.
    pub site: Option<SiteUrl>,
    /// Comma-separated ISO 639-1 languages in use on the site, e.g. `en, fr_ca`.
    pub site_language: String,
    /// Character encoding of the site, e.g. `UTF-8`.
    pub site_charset: String,
}

impl Comment {
    /// Flatten the comment into Akismet form parameters.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        let mut put = |key: &str, value: &str| {
            if !value.trim().is_empty() {
                params.insert(key, value);
            }
        };

        put(USER_IP, &self.user_ip);
        put(USER_AGENT, &self.user_agent);
        put(REFERRER, &self.referrer);
        put(PERMALINK, &self.page);
        put(
            PAGE_TIMESTAMP,
            &self.page_timestamp.map(format_timestamp).unwrap_or_default(),
        );
        put(COMMENT_TYPE, &self.kind);
        put(AUTHOR, &self.author);
        put(AUTHOR_EMAIL, &self.author_email);
        put(AUTHOR_URL, &self.author_url);
        put(CONTENT, &self.content);
        put(
            TIMESTAMP,
            &self.timestamp.map(format_timestamp).unwrap_or_default(),
        );
        put(
            SiteUrl::FIELD,
            self.site.as_ref().map(SiteUrl::as_str).unwrap_or_default(),
        );
        put(SITE_LANGUAGE, &self.site_language);
        put(SITE_CHARSET, &self.site_charset);

        params
    }
}

impl From<&Comment> for Params {
    fn from(comment: &Comment) -> Self {
        comment.to_params()
    }
}

/// Akismet wants UTC in ISO 8601, e.g. `2016-04-18T09:30:59Z`.
fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
