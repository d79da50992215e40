//! Revision references taken from the URL path.

use std::fmt;

use crate::validation::strip_separators;

/// Reserved reference for the working tree, uncommitted edits included.
pub const DIRTY: &str = "DIRTY";

/// Reference used when the path is empty and nothing else is configured.
pub const DEFAULT_REF: &str = "HEAD";

/// A revision named by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Branch, tag, short hash or `HEAD`.
    Symbolic(String),
    /// The working tree.
    Dirty,
}

impl Reference {
    /// Classifies a reference string.
    pub fn new(name: &str) -> Self {
        if name == DIRTY {
            Self::Dirty
        } else {
            Self::Symbolic(name.to_owned())
        }
    }

    /// The reference as the client spelled it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbolic(name) => name,
            Self::Dirty => DIRTY,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the reference out of a validated request path.
///
/// An empty path means `default`.
pub fn parse_reference(path: &str, default: &str) -> Reference {
    match strip_separators(path) {
        "" => Reference::new(default),
        name => Reference::new(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_uses_default() {
        assert_eq!(parse_reference("/", DEFAULT_REF), Reference::Symbolic("HEAD".into()));
        assert_eq!(parse_reference("", "main"), Reference::Symbolic("main".into()));
        assert_eq!(parse_reference("///", "v1"), Reference::Symbolic("v1".into()));
    }

    #[test]
    fn test_path_is_reference() {
        assert_eq!(parse_reference("/c0ffee", DEFAULT_REF), Reference::Symbolic("c0ffee".into()));
        assert_eq!(parse_reference("//v0.3", DEFAULT_REF), Reference::Symbolic("v0.3".into()));
    }

    #[test]
    fn test_dirty_sentinel() {
        assert_eq!(parse_reference("/DIRTY", DEFAULT_REF), Reference::Dirty);
        assert_eq!(parse_reference("/", DIRTY), Reference::Dirty);
        assert_eq!(parse_reference("/dirty", DEFAULT_REF), Reference::Symbolic("dirty".into()));
        assert_eq!(Reference::Dirty.to_string(), "DIRTY");
    }
}
