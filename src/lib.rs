//! Stateless request-accessor library for CMS-style HTTP requests.
//!
//! Every accessor is a pure function over a narrow [`RequestInfo`]
//! capability: missing, blank or malformed values resolve to
//! caller-supplied defaults, never to errors or panics.

pub mod accessor;
pub mod request;
pub mod resource;

pub use accessor::error::ValueError;
pub use request::http::HttpRequestInfo;
pub use request::info::{RequestInfo, RequestParameter};
pub use request::path_info::PathInfo;
pub use resource::{resource_from_request_path, Resource, ResourceResolver};
