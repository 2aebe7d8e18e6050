//! Akismet REST methods and their endpoint URLs.

use url::Url;

pub const API_HOST: &str = "rest.akismet.com";
pub const API_VERSION: &str = "1.1";

/// The four Akismet REST methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    VerifyKey,
    CommentCheck,
    SubmitSpam,
    SubmitHam,
}

impl Method {
    /// Path segment under `/1.1/`.
    pub fn path(self) -> &'static str {
        match self {
            Method::VerifyKey => "verify-key",
            Method::CommentCheck => "comment-check",
            Method::SubmitSpam => "submit-spam",
            Method::SubmitHam => "submit-ham",
        }
    }

    /// Builds the endpoint for this method.
    ///
    /// `verify-key` lives on the bare API host; every other method is
    /// addressed through the `{api_key}.` subdomain. Fails when the key
    /// cannot be used as a host label (whitespace, `/`, `@`, ...).
    pub fn endpoint(self, api_key: &str) -> Result<Url, String> {
        let host = match self {
            Method::VerifyKey => API_HOST.to_string(),
            _ => format!("{}.{}", api_key, API_HOST),
        };

        let url = Url::parse(&format!("https://{}/{}/{}", host, API_VERSION, self.path()))
            .map_err(|e| format!("invalid endpoint URL: {}", e))?;

        // A key containing URL delimiters parses, but not as the host we asked for.
        match url.host_str() {
            Some(parsed) if parsed.eq_ignore_ascii_case(&host) => Ok(url),
            _ => Err("API key is not a valid host name label".to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
