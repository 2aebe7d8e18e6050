//! Interpretation of Akismet replies.

use serde::Serialize;

use crate::client::HttpResponse;

pub const PRO_TIP_HEADER: &str = "x-akismet-pro-tip";
pub const ERROR_HEADER: &str = "x-akismet-error";
pub const DEBUG_HELP_HEADER: &str = "x-akismet-debug-help";

/// What a call amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The body was a success token: `true`, `valid` or `Thanks...`.
    /// For `comment-check` this means the comment is spam.
    Affirmative,
    /// Akismet answered with anything else.
    Negative,
    /// No answer: transport failure, or the request could not be built.
    Unreachable,
}

/// Outcome and diagnostics of a single Akismet call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AkismetResponse {
    pub verdict: Verdict,
    pub http_status_code: Option<u16>,
    /// Trimmed response body.
    pub raw_response: Option<String>,
    pub pro_tip: String,
    pub is_discard: bool,
    pub error_message: String,
    pub debug_help: String,
    pub transport_error: Option<String>,
}

impl AkismetResponse {
    pub(crate) fn from_http(response: &HttpResponse) -> Self {
        let raw_response = response.body.as_deref().map(|b| b.trim().to_string());
        let verdict = match raw_response.as_deref() {
            Some(body) if is_success_body(body) => Verdict::Affirmative,
            _ => Verdict::Negative,
        };
        let header = |name: &str| response.header(name).unwrap_or_default().to_string();
        let pro_tip = header(PRO_TIP_HEADER);

        Self {
            verdict,
            http_status_code: Some(response.status),
            raw_response,
            is_discard: pro_tip.eq_ignore_ascii_case("discard"),
            pro_tip,
            error_message: header(ERROR_HEADER),
            debug_help: header(DEBUG_HELP_HEADER),
            transport_error: None,
        }
    }

    pub(crate) fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unreachable,
            http_status_code: None,
            raw_response: None,
            pro_tip: String::new(),
            is_discard: false,
            error_message: String::new(),
            debug_help: String::new(),
            transport_error: Some(reason.into()),
        }
    }

    /// The boolean answer: `false` for both a negative reply and no reply.
    pub fn is_success(&self) -> bool {
        self.verdict == Verdict::Affirmative
    }

    pub fn is_unreachable(&self) -> bool {
        self.verdict == Verdict::Unreachable
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// Shared by all four methods. `verify-key` answers `valid`,
/// `comment-check` answers `true`, the submit methods answer
/// "Thanks for making the web a better place."
pub fn is_success_body(body: &str) -> bool {
    let body = body.trim();
    body.eq_ignore_ascii_case("true")
        || body.eq_ignore_ascii_case("valid")
        || body
            .get(..6)
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case("thanks"))
}
