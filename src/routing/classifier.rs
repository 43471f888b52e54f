//! Request classification by file extension.
//!
//! # Responsibilities
//! - Lower-case the request target before matching
//! - Check the cacheable set first, then the noncacheable set
//! - Everything else is a page
//!
//! # Design Decisions
//! - Total function: every path yields exactly one classification
//! - Substring matching by default, so `/a?img=x.jpg` is cacheable and
//!   `/foo.jpgbar` is too; suffix matching is opt-in
//! - No regex in hot path

use std::fmt;

use crate::config::{ClassificationConfig, ExtensionMatching};

/// Category assigned to every request before headers are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Long-lived static asset, served with an immutable cache policy.
    Cacheable,
    /// Static asset served without a cache policy.
    Noncacheable,
    /// Pre-rendered HTML page, eligible for fallback resolution.
    Page,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Cacheable => "cacheable",
            Classification::Noncacheable => "noncacheable",
            Classification::Page => "page",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension-based classifier compiled from configuration at startup.
#[derive(Debug, Clone)]
pub struct Classifier {
    cacheable: Vec<String>,
    noncacheable: Vec<String>,
    matching: ExtensionMatching,
}

impl Classifier {
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self {
            cacheable: normalize(&config.cacheable_extensions),
            noncacheable: normalize(&config.noncacheable_extensions),
            matching: config.matching,
        }
    }

    /// Classify a request target (path, optionally with its query string).
    pub fn classify(&self, request_path: &str) -> Classification {
        let path = request_path.to_lowercase();
        let candidate = match self.matching {
            ExtensionMatching::Substring => path.as_str(),
            ExtensionMatching::Suffix => path.split('?').next().unwrap_or_default(),
        };

        if self.matches_any(candidate, &self.cacheable) {
            Classification::Cacheable
        } else if self.matches_any(candidate, &self.noncacheable) {
            Classification::Noncacheable
        } else {
            Classification::Page
        }
    }

    fn matches_any(&self, candidate: &str, extensions: &[String]) -> bool {
        extensions.iter().any(|ext| match self.matching {
            ExtensionMatching::Substring => candidate.contains(ext.as_str()),
            ExtensionMatching::Suffix => candidate.ends_with(ext.as_str()),
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}

fn normalize(extensions: &[String]) -> Vec<String> {
    extensions.iter().map(|ext| ext.to_lowercase()).collect()
}

/// Classify with the default extension sets and substring matching.
pub fn classify(request_path: &str) -> Classification {
    Classifier::default().classify(request_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_classifier() -> Classifier {
        Classifier::from_config(&ClassificationConfig {
            matching: ExtensionMatching::Suffix,
            ..ClassificationConfig::default()
        })
    }

    #[test]
    fn test_cacheable_extensions() {
        assert_eq!(classify("/images/cat.jpg"), Classification::Cacheable);
        assert_eq!(classify("/favicon.ico"), Classification::Cacheable);
        assert_eq!(classify("/IMAGES/CAT.JPG"), Classification::Cacheable);
    }

    #[test]
    fn test_noncacheable_extensions() {
        assert_eq!(classify("/app.js"), Classification::Noncacheable);
        assert_eq!(classify("/data/posts.json"), Classification::Noncacheable);
        assert_eq!(classify("/Main.JS"), Classification::Noncacheable);
    }

    #[test]
    fn test_cacheable_wins_over_noncacheable() {
        assert_eq!(classify("/bundle.js?icon=logo.ico"), Classification::Cacheable);
    }

    #[test]
    fn test_everything_else_is_a_page() {
        assert_eq!(classify("/"), Classification::Page);
        assert_eq!(classify("/posts/hello-world"), Classification::Page);
        assert_eq!(classify("/style.css"), Classification::Page);
        assert_eq!(classify(""), Classification::Page);
    }

    #[test]
    fn test_substring_matching_quirks() {
        assert_eq!(classify("/foo.jpgbar"), Classification::Cacheable);
        assert_eq!(classify("/posts/home?from=x.json"), Classification::Noncacheable);
        // ".js" is a prefix of ".json" and of ".jsx"
        assert_eq!(classify("/component.jsx"), Classification::Noncacheable);
    }

    #[test]
    fn test_suffix_matching() {
        let classifier = suffix_classifier();
        assert_eq!(classifier.classify("/foo.jpgbar"), Classification::Page);
        assert_eq!(classifier.classify("/cat.JPG"), Classification::Cacheable);
        assert_eq!(classifier.classify("/app.js?v=3"), Classification::Noncacheable);
        assert_eq!(classifier.classify("/posts/home?from=x.json"), Classification::Page);
    }

    #[test]
    fn test_custom_sets() {
        let classifier = Classifier::from_config(&ClassificationConfig {
            cacheable_extensions: vec![".png".into(), ".woff2".into()],
            noncacheable_extensions: vec![".txt".into()],
            matching: ExtensionMatching::Substring,
        });
        assert_eq!(classifier.classify("/fonts/a.woff2"), Classification::Cacheable);
        assert_eq!(classifier.classify("/robots.txt"), Classification::Noncacheable);
        assert_eq!(classifier.classify("/cat.jpg"), Classification::Page);
    }
}
