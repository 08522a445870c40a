//! Resource resolution capabilities.
//!
//! # Responsibilities
//! - Define the content-node and resolver contracts the accessors use
//! - Resolve a request's resource path against an injected resolver
//!
//! # Design Decisions
//! - The resolver is an external collaborator; this crate only defines
//!   the seam and an in-memory implementation for tests and embedding
//! - Unresolvable paths are `None`, never an error
//! - Only the resource-path portion of a decorated request path is
//!   resolved; selectors, extension and suffix are addressing decoration

use crate::request::info::RequestInfo;
use crate::request::path_info::PathInfo;

pub mod memory;

pub use memory::{MemoryResolver, MemoryResource};

/// An addressable content node.
pub trait Resource {
    /// Repository path of the node.
    fn path(&self) -> &str;

    /// Last segment of the path; empty for the root.
    fn name(&self) -> &str;

    /// Flat property map of the node.
    fn properties(&self) -> &serde_json::Value;
}

/// Resolves repository paths to content nodes.
pub trait ResourceResolver {
    type Resource: Resource;

    /// The node at `path`, or `None` when nothing is addressable there.
    fn resolve(&self, path: &str) -> Option<Self::Resource>;
}

/// Resolve the resource addressed by the request's path, stripping any
/// selector/extension/suffix decoration first.
pub fn resource_from_request_path<R, V>(req: &R, resolver: &V) -> Option<V::Resource>
where
    R: RequestInfo,
    V: ResourceResolver,
{
    let info = PathInfo::parse(req.path());
    resolver.resolve(info.resource_path())
}
