//! Value-normalization subsystem.
//!
//! # Data Flow
//! ```text
//! RequestInfo capability
//!     → params.rs (string/int/bool parameters, headers, multi-values)
//!     → selectors.rs (index, membership, prefix lookups)
//!     → url.rs (base URL, full URL reconstruction)
//!
//! Internally fallible (error.rs), defaulted at the public boundary.
//! ```
//!
//! # Design Decisions
//! - Public accessors are total: missing or malformed input resolves to a
//!   caller-supplied default, never an error or panic
//! - Malformed values emit a debug-level event and nothing else
//! - A `try_*` layer exposes the underlying cause for callers that want it
//! - "Null request" cases from the upstream contract collapse into the
//!   type system; a blank name still resolves to the safe default

pub mod error;
pub mod params;
pub mod selectors;
pub mod url;

pub use error::ValueError;
pub use params::{
    bool_parameter_or, has_parameter, int_parameter_or, is_ssi_enabled, parameter,
    parameter_list, parameter_or, parameter_value_or_empty, try_bool_parameter,
    try_int_parameter, SSI_ENABLED_HEADER,
};
pub use selectors::{first_selector_or, has_selector, selector_by_prefix, selector_or, selectors};
pub use url::{base_url, full_request_url};

/// Empty or whitespace-only.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
