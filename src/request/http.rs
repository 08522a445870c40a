//! RequestInfo adapter for axum/http requests.
//!
//! # Responsibilities
//! - Decode the query string into ordered, multi-valued parameters
//! - Derive the selector decomposition from the URI path
//! - Reconstruct the full URL from scheme and authority
//!
//! # Design Decisions
//! - State is copied out of the request at construction; the adapter never
//!   holds a borrow of the framework request
//! - Authority falls back to the Host header, scheme falls back to `http`
//!   (origin-form request targets carry neither)
//! - Query decoding tolerates flag parameters without `=`

use axum::http::{HeaderMap, Request};
use url::form_urlencoded;

use crate::request::info::{RequestInfo, RequestParameter};
use crate::request::path_info::PathInfo;

/// Snapshot of an `http::Request` exposing the [`RequestInfo`] contract.
#[derive(Debug, Clone)]
pub struct HttpRequestInfo {
    params: Vec<RequestParameter>,
    selectors: Vec<String>,
    path: String,
    url: String,
    query: Option<String>,
    headers: HeaderMap,
}

impl HttpRequestInfo {
    /// Build a snapshot from any axum/http request, regardless of body type.
    pub fn new<B>(req: &Request<B>) -> Self {
        let uri = req.uri();
        let path = uri.path().to_string();
        let query = uri.query().map(str::to_string);

        let params = query
            .as_deref()
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| RequestParameter::form(k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        let scheme = uri.scheme_str().unwrap_or("http");
        let authority = uri
            .authority()
            .map(|a| a.as_str().to_string())
            .or_else(|| {
                req.headers()
                    .get("host")
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_string)
            });
        let url = match authority {
            Some(host) => format!("{}://{}{}", scheme, host, path),
            None => path.clone(),
        };

        let selectors = PathInfo::parse(&path).selectors().to_vec();

        Self {
            params,
            selectors,
            path,
            url,
            query,
            headers: req.headers().clone(),
        }
    }

    /// Full decomposition of the request path.
    pub fn path_info(&self) -> PathInfo {
        PathInfo::parse(&self.path)
    }
}

impl RequestInfo for HttpRequestInfo {
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
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
