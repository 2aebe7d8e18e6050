//! The comment payload sent to `comment-check`, `submit-spam` and `submit-ham`.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AkismetError, Result};

/// Well-known values for [`Comment::comment_type`]. Akismet accepts any string.
pub mod comment_type {
    pub const COMMENT: &str = "comment";
    pub const FORUM_POST: &str = "forum-post";
    pub const REPLY: &str = "reply";
    pub const BLOG_POST: &str = "blog-post";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const SIGNUP: &str = "signup";
    pub const MESSAGE: &str = "message";
    pub const PINGBACK: &str = "pingback";
    pub const TRACKBACK: &str = "trackback";
    pub const TWEET: &str = "tweet";
}

/// `user_role` value that makes Akismet never classify the comment as spam.
pub const ADMIN_ROLE: &str = "administrator";

/// A comment (or any other piece of user content) to classify.
///
/// Blank string fields are treated as absent and never put on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Comment {
    pub user_ip: String,
    pub user_agent: String,
    pub referrer: String,
    pub permalink: String,
    pub comment_type: String,
    pub author: String,
    pub author_email: String,
    pub author_url: String,
    pub content: String,
    pub date_gmt: String,
    pub post_modified_gmt: String,
    pub blog_lang: String,
    pub blog_charset: String,
    pub user_role: String,
    pub is_test: bool,
    pub recheck_reason: String,
    /// Extra form fields, sent after the standard ones.
    pub other: BTreeMap<String, String>,
}

macro_rules! with_field {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.$field = value.into();
                self
            }
        )*
    };
}

impl Comment {
    pub fn new(user_ip: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            user_ip: user_ip.into(),
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    /// Builds a comment from an inbound HTTP request.
    ///
    /// `User-Agent` and `Referer` fill the matching fields. Every header is
    /// also forwarded as a CGI-style variable (`Accept-Language` becomes
    /// `HTTP_ACCEPT_LANGUAGE`), which Akismet uses as extra signal.
    pub fn from_request(user_ip: impl Into<String>, headers: &[(String, String)]) -> Self {
        let mut comment = Self::new(user_ip, "");
        for (name, value) in headers {
            if name.eq_ignore_ascii_case("user-agent") {
                comment.user_agent = value.clone();
            } else if name.eq_ignore_ascii_case("referer") {
                comment.referrer = value.clone();
            }
            let env_name = format!("HTTP_{}", name.to_ascii_uppercase().replace('-', "_"));
            comment.other.insert(env_name, value.clone());
        }
        comment
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    with_field! {
        with_referrer => referrer,
        with_permalink => permalink,
        with_type => comment_type,
        with_author => author,
        with_author_email => author_email,
        with_author_url => author_url,
        with_content => content,
        with_date_gmt => date_gmt,
        with_post_modified_gmt => post_modified_gmt,
        with_blog_lang => blog_lang,
        with_blog_charset => blog_charset,
        with_user_role => user_role,
        with_recheck_reason => recheck_reason,
    }

    pub fn with_test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    pub fn with_other(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.other.insert(key.into(), value.into());
        self
    }

    /// At least one of `user_ip` and `user_agent` must be present.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.user_ip) && is_blank(&self.user_agent) {
            return Err(AkismetError::Validation(
                "user_ip and/or user_agent must be specified".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Formats a timestamp for `comment_date_gmt` / `comment_post_modified_gmt`.
pub fn date_to_gmt<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
