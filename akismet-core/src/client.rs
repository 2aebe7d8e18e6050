/// Output of a completed HTTP request.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpResponse {
    /// Returns the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A generic interface to send the form POSTs Akismet expects.
/// Your application can implement this trait and hand it to [`crate::Akismet`]
/// to decouple the client from any specific HTTP library.
///
/// An `Err` means no HTTP response was received at all (DNS, TCP, TLS,
/// timeout). Non-2xx statuses are still `Ok`.
pub trait HttpClient {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, String>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, String> {
        (**self).post(url, headers, body)
    }
}
