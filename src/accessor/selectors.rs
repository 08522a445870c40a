//! Selector accessors.
//!
//! # Responsibilities
//! - Expose the request's selectors as an owned list
//! - Index, membership and prefix lookups with defaults
//!
//! # Design Decisions
//! - Membership is case-insensitive; prefix matching is case-sensitive
//! - Out-of-range access resolves to the default, never panics
//! - O(n) scans; selector lists are a handful of entries in practice

use crate::request::info::RequestInfo;

/// Owned copy of the request's selectors, in request order.
/// Callers may mutate the copy freely; the request is never affected.
pub fn selectors<R: RequestInfo>(req: &R) -> Vec<String> {
    req.selectors().to_vec()
}

/// True iff any selector equals `target`, ignoring ASCII case.
pub fn has_selector<R: RequestInfo>(req: &R, target: &str) -> bool {
    req.selectors().iter().any(|s| s.eq_ignore_ascii_case(target))
}

/// Selector at `index`, or `default` when the request has no selector
/// at that position.
pub fn selector_or<R: RequestInfo>(req: &R, index: usize, default: &str) -> String {
    req.selectors()
        .get(index)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Selector at index 0, or `default`.
pub fn first_selector_or<R: RequestInfo>(req: &R, default: &str) -> String {
    selector_or(req, 0, default)
}

/// Remainder of the first selector starting with `prefix`, or the empty
/// string when no selector matches. An exact match yields `""`.
pub fn selector_by_prefix<R: RequestInfo>(req: &R, prefix: &str) -> String {
    req.selectors()
        .iter()
        .find_map(|s| s.strip_prefix(prefix))
        .unwrap_or_default()
        .to_string()
}
