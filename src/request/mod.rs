//! Request abstraction subsystem.
//!
//! # Data Flow
//! ```text
//! Framework request (axum http::Request, test fake, ...)
//!     → info.rs (RequestInfo capability: parameters, selectors, path/url, headers)
//!     → path_info.rs (resource path / selectors / extension / suffix decomposition)
//!     → [accessor layer normalizes values]
//! ```
//!
//! # Design Decisions
//! - Accessors depend on the `RequestInfo` trait, never a framework type
//! - Adapters own their decoded state; no borrow outlives the request
//! - Parameter decoding is strict UTF-8; lossy access is explicit

pub mod http;
pub mod info;
pub mod path_info;

pub use http::HttpRequestInfo;
pub use info::{RequestInfo, RequestParameter};
pub use path_info::PathInfo;
