//! Fallback resolution for page requests.
//!
//! A page request that static delivery could not satisfy is mapped onto a
//! pre-rendered `.html` file under the physical root. When that file does not
//! exist the client is sent to the fixed fallback route instead.

use std::path::{Path, PathBuf};

/// Directory from which static and pre-rendered content is served.
///
/// Set once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalRoot(PathBuf);

impl PhysicalRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Map a site-relative file path to its location on disk.
    pub fn join(&self, relative: &Path) -> PathBuf {
        self.0.join(relative)
    }
}

/// Outcome of resolving a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    /// Serve this file, relative to the physical root.
    ServeFile(PathBuf),
    /// Redirect the client to this route.
    Redirect(String),
}

/// Resolves page requests against the physical root.
#[derive(Debug, Clone)]
pub struct FallbackResolver {
    root: PhysicalRoot,
    fallback_route: String,
}

impl FallbackResolver {
    pub fn new(root: PhysicalRoot, fallback_route: impl Into<String>) -> Self {
        Self {
            root,
            fallback_route: fallback_route.into(),
        }
    }

    pub fn root(&self) -> &PhysicalRoot {
        &self.root
    }

    /// Resolve a request path.
    ///
    /// Blocks on a file-system existence check; call from a blocking context.
    pub fn resolve(&self, request_path: &str) -> ResolvedAction {
        match page_file(request_path) {
            Some(relative) if self.root.join(&relative).is_file() => {
                ResolvedAction::ServeFile(relative)
            }
            _ => ResolvedAction::Redirect(self.fallback_route.clone()),
        }
    }
}

/// Build the `.html` file path for a request path, relative to the root.
///
/// Returns `None` for paths that would leave the root or name nothing.
fn page_file(request_path: &str) -> Option<PathBuf> {
    let lowered = request_path.to_lowercase();
    let trimmed = lowered.trim_start_matches('/');
    if trimmed.is_empty() || trimmed.contains('\\') {
        return None;
    }

    let contained = trimmed
        .split('/')
        .all(|segment| segment != "." && segment != "..");

    contained.then(|| PathBuf::from(format!("{trimmed}.html")))
}
