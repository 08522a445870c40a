//! In-memory resource resolver.
//!
//! HashMap-backed implementation of the resolver seam, used by tests and
//! by embedders that have no real content repository. Immutable after
//! construction, so shareable across threads without locks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceResolver};

/// A resolved in-memory content node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryResource {
    path: String,
    properties: serde_json::Value,
}

impl MemoryResource {
    pub fn new(path: impl Into<String>, properties: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            properties,
        }
    }
}

impl Resource for MemoryResource {
    fn path(&self) -> &str {
        &self.path
    }

    fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    fn properties(&self) -> &serde_json::Value {
        &self.properties
    }
}

/// Path-keyed resolver over a fixed set of resources.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    resources: HashMap<String, serde_json::Value>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a resource at `path`.
    pub fn with_resource(mut self, path: impl Into<String>, properties: serde_json::Value) -> Self {
        self.resources.insert(path.into(), properties);
        self
    }
}

impl ResourceResolver for MemoryResolver {
    type Resource = MemoryResource;

    fn resolve(&self, path: &str) -> Option<MemoryResource> {
        self.resources
            .get(path)
            .map(|props| MemoryResource::new(path, props.clone()))
    }
}
