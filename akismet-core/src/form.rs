//! Form bodies for the Akismet REST methods.

use tracing::warn;

use crate::comment::{is_blank, Comment};
use crate::error::Result;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fields for `verify-key`.
pub fn verify_key_fields(api_key: &str, blog: &str) -> Vec<(String, String)> {
    vec![
        ("key".to_string(), api_key.to_string()),
        ("blog".to_string(), blog.to_string()),
    ]
}

/// Fields for `comment-check`, `submit-spam` and `submit-ham`.
///
/// Blank optional fields are left out. Entries of [`Comment::other`] come
/// last; one whose key matches a standard field is dropped.
pub fn comment_fields(blog: &str, comment: &Comment) -> Result<Vec<(String, String)>> {
    comment.validate()?;

    let mut fields = vec![
        ("blog".to_string(), blog.to_string()),
        ("user_ip".to_string(), comment.user_ip.clone()),
        ("user_agent".to_string(), comment.user_agent.clone()),
    ];

    let optional = [
        ("referrer", &comment.referrer),
        ("permalink", &comment.permalink),
        ("comment_type", &comment.comment_type),
        ("comment_author", &comment.author),
        ("comment_author_email", &comment.author_email),
        ("comment_author_url", &comment.author_url),
        ("comment_content", &comment.content),
        ("comment_date_gmt", &comment.date_gmt),
        ("comment_post_modified_gmt", &comment.post_modified_gmt),
        ("blog_lang", &comment.blog_lang),
        ("blog_charset", &comment.blog_charset),
        ("user_role", &comment.user_role),
    ];
    for (key, value) in optional {
        if !is_blank(value) {
            fields.push((key.to_string(), value.clone()));
        }
    }

    if comment.is_test {
        fields.push(("is_test".to_string(), "1".to_string()));
    }
    if !is_blank(&comment.recheck_reason) {
        fields.push(("recheck_reason".to_string(), comment.recheck_reason.clone()));
    }

    for (key, value) in &comment.other {
        if is_standard_key(key) {
            warn!("Ignoring extra field '{}': it collides with a standard field", key);
            continue;
        }
        fields.push((key.clone(), value.clone()));
    }

    Ok(fields)
}

fn is_standard_key(key: &str) -> bool {
    const STANDARD: [&str; 18] = [
        "key",
        "blog",
        "user_ip",
        "user_agent",
        "referrer",
        "permalink",
        "comment_type",
        "comment_author",
        "comment_author_email",
        "comment_author_url",
        "comment_content",
        "comment_date_gmt",
        "comment_post_modified_gmt",
        "blog_lang",
        "blog_charset",
        "user_role",
        "is_test",
        "recheck_reason",
    ];
    STANDARD.contains(&key)
}

/// Percent-encodes `fields` as an `application/x-www-form-urlencoded` body.
pub fn encode_form(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
