//! Wire-level logging with the API key masked out.

use tracing::{debug, trace, Level};

use crate::client::{HttpClient, HttpResponse};

/// Masks `secret`: its first 8 characters stay readable and the rest become
/// `x`. Secrets of 8 characters or fewer are masked completely.
pub fn mask(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        return "x".repeat(len);
    }
    let visible: String = secret.chars().take(8).collect();
    format!("{}{}", visible, "x".repeat(len - 8))
}

/// Replaces every occurrence of `secret` in `text` with [`mask`]`(secret)`.
///
/// The lower-cased and form-encoded spellings are masked too, since that is
/// how the key shows up in a parsed host name and in a request body.
pub fn redact(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    let masked = mask(secret);
    let encoded: String = url::form_urlencoded::byte_serialize(secret.as_bytes()).collect();

    let mut out = text.replace(secret, &masked);
    for variant in [secret.to_ascii_lowercase(), encoded] {
        if variant != secret {
            out = out.replace(&variant, &masked);
        }
    }
    out
}

/// An [`HttpClient`] wrapper that traces each request and response.
pub struct LoggingClient<C> {
    inner: C,
    secret: String,
}

impl<C: HttpClient> LoggingClient<C> {
    pub fn new(inner: C, secret: impl Into<String>) -> Self {
        Self {
            inner,
            secret: secret.into(),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn redact(&self, text: &str) -> String {
        redact(text, &self.secret)
    }
}

impl<C: HttpClient> HttpClient for LoggingClient<C> {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, String> {
        let verbose = tracing::enabled!(Level::TRACE);

        if verbose {
            trace!("> POST {}", self.redact(url));
            for (k, v) in headers {
                trace!("> {}: {}", k, self.redact(v));
            }
            trace!("> {}", self.redact(body));
        }

        match self.inner.post(url, headers, body) {
            Ok(response) => {
                if verbose {
                    trace!("< {}", response.status);
                    for (k, v) in &response.headers {
                        trace!("< {}: {}", k, self.redact(v));
                    }
                    if let Some(ref b) = response.body {
                        trace!("< {}", self.redact(b));
                    }
                }
                Ok(response)
            }
            Err(e) => {
                let e = self.redact(&e);
                debug!("POST {} failed: {}", self.redact(url), e);
                Err(e)
            }
        }
    }
}
