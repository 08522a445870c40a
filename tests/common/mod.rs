//! Shared fixtures for integration tests.

use request_util::{RequestInfo, RequestParameter};

/// Install a debug-level subscriber so accessor diagnostics show up under
/// `cargo test -- --nocapture`. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("request_util=debug")
        .with_test_writer()
        .try_init();
}

/// Builder-style fake implementing the request capability.
#[derive(Debug, Clone)]
pub struct FakeRequest {
    params: Vec<RequestParameter>,
    selectors: Vec<String>,
    path: String,
    url: String,
    query: Option<String>,
    headers: Vec<(String, String)>,
}

impl Default for FakeRequest {
    fn default() -> Self {
        Self {
            params: Vec::new(),
            selectors: Vec::new(),
            path: "/content/page.html".to_string(),
            url: "http://localhost/content/page.html".to_string(),
            query: None,
            headers: Vec::new(),
        }
    }
}

#[allow(dead_code)]
impl FakeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push(RequestParameter::form(name, value));
        self
    }

    pub fn upload(mut self, name: &str, bytes: &[u8]) -> Self {
        self.params
            .push(RequestParameter::upload(name, bytes.to_vec(), None));
        self
    }

    pub fn selector(mut self, selector: &str) -> Self {
        self.selectors.push(selector.to_string());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

impl RequestInfo for FakeRequest {
    fn parameter(&self, name: &str) -> Option<&RequestParameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    fn parameter_values(&self, name: &str) -> Vec<&RequestParameter> {
        self.params.iter().filter(|p| p.name() == name).collect()
    }

    fn selectors(&self) -> &[String] {
        &self.selectors
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
