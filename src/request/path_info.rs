//! Content path decomposition.
//!
//! # Responsibilities
//! - Split a request path into resource path, selectors, extension, suffix
//!
//! # Design Decisions
//! - The first dot in the path ends the resource path; the dotted run up
//!   to the next `/` (or end of path) is the decoration, the rest is the
//!   suffix
//! - Parsing is total: degenerate input yields an empty decomposition with
//!   the input as resource path
//! - No regex, single left-to-right scan

/// Decomposed request path: `/<resource>[.sel1.sel2...].<ext>[/suffix]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathInfo {
    resource_path: String,
    selectors: Vec<String>,
    extension: Option<String>,
    suffix: Option<String>,
}

impl PathInfo {
    /// Parse a decoded request path. Never fails.
    pub fn parse(path: &str) -> Self {
        let Some(dot) = path.find('.') else {
            return Self {
                resource_path: path.to_string(),
                ..Self::default()
            };
        };

        let resource_path = path[..dot].to_string();
        let rest = &path[dot + 1..];
        let (decoration, suffix) = match rest.find('/') {
            Some(slash) => (&rest[..slash], Some(rest[slash..].to_string())),
            None => (rest, None),
        };

        let mut tokens: Vec<&str> = decoration.split('.').collect();
        let extension = match tokens.pop() {
            Some("") | None => None,
            Some(ext) => Some(ext.to_string()),
        };
        let selectors = tokens
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            resource_path,
            selectors,
            extension,
            suffix,
        }
    }

    /// Path portion addressing the resource, without decoration.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Selectors in request order. Empty when the path carries none.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Suffix including its leading `/`, when present.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}
