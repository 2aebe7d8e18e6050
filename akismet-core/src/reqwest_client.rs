use crate::client::{HttpClient, HttpResponse};

/// The default HTTP client, backed by the `reqwest` blocking client.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Uses a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, String> {
        let mut builder = self.client.post(url);

        for (k, v) in headers {
            builder = builder.header(k.as_str(), v.as_str());
        }

        let response = builder
            .body(body.to_string())
            .send()
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status().as_u16();

        let mut out_headers = Vec::new();
        for (k, v) in response.headers() {
            out_headers.push((
                k.as_str().to_string(),
                v.to_str().unwrap_or("(binary)").to_string(),
            ));
        }

        let body_text = response
            .text()
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        Ok(HttpResponse {
            status,
            headers: out_headers,
            body: Some(body_text),
        })
    }
}
