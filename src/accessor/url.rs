//! URL reconstruction.
//!
//! # Responsibilities
//! - Derive the base URL (everything before the request path)
//! - Rebuild the full URL including the query string
//!
//! # Design Decisions
//! - Plain substring arithmetic on the request-supplied URL; no URL
//!   parsing or normalization
//! - A blank query string is treated as absent

use crate::accessor::is_blank;
use crate::request::info::RequestInfo;

/// URL prefix preceding the request path, with a trailing `/` stripped.
/// `http://host/a/b` with path `/a/b` yields `http://host`. When the path
/// does not occur in the URL, the whole URL (minus a trailing `/`) is
/// returned.
pub fn base_url<R: RequestInfo>(req: &R) -> String {
    let url = req.url();
    let path = req.path();
    let base = match url.find(path) {
        Some(idx) if !path.is_empty() => &url[..idx],
        _ => url,
    };
    base.strip_suffix('/').unwrap_or(base).to_string()
}

/// Full request URL, with `?query` appended only when the query string is
/// present and non-blank.
pub fn full_request_url<R: RequestInfo>(req: &R) -> String {
    let url = req.url();
    match req.query_string() {
        Some(query) if !is_blank(query) => format!("{}?{}", url, query),
        _ => url.to_string(),
    }
}
