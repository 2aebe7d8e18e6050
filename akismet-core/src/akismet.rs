//! The Akismet client.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error};

use crate::client::HttpClient;
use crate::comment::{is_blank, Comment};
use crate::error::{AkismetError, Result};
use crate::form::{self, FORM_CONTENT_TYPE};
use crate::logging::{mask, redact, LoggingClient};
use crate::method::Method;
use crate::response::AkismetResponse;

/// Library identifier sent in every `User-Agent` header.
pub const LIBRARY_AGENT: &str = concat!("akismet-rs/", env!("CARGO_PKG_VERSION"));

/// `User-Agent` value: the library identifier, optionally preceded by the
/// application's own (`"MyApp/1.0 | akismet-rs/0.1.0"`).
pub fn user_agent(app_user_agent: Option<&str>) -> String {
    match app_user_agent {
        Some(app) if !is_blank(app) => format!("{} | {}", app.trim(), LIBRARY_AGENT),
        _ => LIBRARY_AGENT.to_string(),
    }
}

/// A client bound to one API key / blog pair.
///
/// Every call sends exactly one request and returns its own
/// [`AkismetResponse`], so a client can be shared between threads.
pub struct Akismet<C: HttpClient> {
    transport: LoggingClient<C>,
    api_key: String,
    blog: Option<String>,
    app_user_agent: Option<String>,
    verified: AtomicBool,
}

impl<C: HttpClient> Akismet<C> {
    pub fn new(client: C, api_key: impl Into<String>, blog: impl Into<String>) -> Result<Self> {
        let mut akismet = Self::with_key(client, api_key)?;
        akismet.set_blog(blog)?;
        Ok(akismet)
    }

    /// Creates a client whose blog URL is set later with [`Akismet::set_blog`].
    pub fn with_key(client: C, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if is_blank(&api_key) {
            return Err(AkismetError::Configuration(
                "an Akismet API key must be specified".to_string(),
            ));
        }
        Ok(Self {
            transport: LoggingClient::new(client, api_key.clone()),
            api_key,
            blog: None,
            app_user_agent: None,
            verified: AtomicBool::new(false),
        })
    }

    pub fn set_blog(&mut self, blog: impl Into<String>) -> Result<()> {
        let blog = blog.into();
        if is_blank(&blog) {
            return Err(AkismetError::Configuration(
                "a blog URL must be specified".to_string(),
            ));
        }
        self.blog = Some(blog);
        Ok(())
    }

    pub fn blog(&self) -> Option<&str> {
        self.blog.as_deref()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_app_user_agent(&mut self, app_user_agent: impl Into<String>) {
        self.app_user_agent = Some(app_user_agent.into());
    }

    pub fn app_user_agent(&self) -> Option<&str> {
        self.app_user_agent.as_deref()
    }

    pub fn user_agent(&self) -> String {
        user_agent(self.app_user_agent.as_deref())
    }

    /// Result of the most recent [`Akismet::verify_key`] call.
    pub fn is_verified_key(&self) -> bool {
        self.verified.load(Ordering::Relaxed)
    }

    /// The wrapped HTTP client.
    pub fn client(&self) -> &C {
        self.transport.inner()
    }

    /// Checks that the API key is valid for the blog.
    pub fn verify_key(&self) -> Result<AkismetResponse> {
        let fields = form::verify_key_fields(&self.api_key, self.require_blog()?);
        let response = self.execute(Method::VerifyKey, &fields);
        self.verified.store(response.is_success(), Ordering::Relaxed);
        Ok(response)
    }

    /// Asks Akismet whether `comment` is spam. Success means spam.
    pub fn check_comment(&self, comment: &Comment) -> Result<AkismetResponse> {
        self.send_comment(Method::CommentCheck, comment)
    }

    /// Reports a comment Akismet missed as spam.
    pub fn submit_spam(&self, comment: &Comment) -> Result<AkismetResponse> {
        self.send_comment(Method::SubmitSpam, comment)
    }

    /// Reports a comment Akismet wrongly flagged as spam.
    pub fn submit_ham(&self, comment: &Comment) -> Result<AkismetResponse> {
        self.send_comment(Method::SubmitHam, comment)
    }

    fn require_blog(&self) -> Result<&str> {
        self.blog
            .as_deref()
            .ok_or_else(|| AkismetError::Configuration("no blog URL has been set".to_string()))
    }

    fn send_comment(&self, method: Method, comment: &Comment) -> Result<AkismetResponse> {
        let fields = form::comment_fields(self.require_blog()?, comment)?;
        Ok(self.execute(method, &fields))
    }

    fn execute(&self, method: Method, fields: &[(String, String)]) -> AkismetResponse {
        let url = match method.endpoint(&self.api_key) {
            Ok(url) => url,
            Err(reason) => {
                let reason = redact(&reason, &self.api_key);
                error!("{} request not sent: {}", method, reason);
                return AkismetResponse::unreachable(reason);
            }
        };

        let headers = vec![
            ("User-Agent".to_string(), self.user_agent()),
            ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
        ];
        let body = form::encode_form(fields);

        match self.transport.post(url.as_str(), &headers, &body) {
            Ok(http) => {
                let response = AkismetResponse::from_http(&http);
                debug!(
                    "{} -> {} {:?} (pro tip: '{}')",
                    method, http.status, response.verdict, response.pro_tip
                );
                response
            }
            Err(e) => {
                error!("{} request failed: {}", method, e);
                AkismetResponse::unreachable(e)
            }
        }
    }
}

#[cfg(feature = "reqwest")]
impl Akismet<crate::reqwest_client::ReqwestClient> {
    /// A client using the default `reqwest` transport.
    pub fn with_default_client(api_key: impl Into<String>, blog: impl Into<String>) -> Result<Self> {
        Self::new(crate::reqwest_client::ReqwestClient::new(), api_key, blog)
    }
}

impl<C: HttpClient> std::fmt::Debug for Akismet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Akismet")
            .field("api_key", &mask(&self.api_key))
            .field("blog", &self.blog)
            .field("app_user_agent", &self.app_user_agent)
            .field("verified", &self.is_verified_key())
            .finish()
    }
}
