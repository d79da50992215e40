//! Environment settings for the content resolver.

use serde::Deserialize;
use std::path::PathBuf;

use crate::fetch::TARGET_FILE;
use crate::reference::DEFAULT_REF;

/// Settings read from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Reference served for an empty path (`DEFAULT_GIT_REF`).
    #[serde(rename = "default_git_ref", default = "default_ref")]
    pub default_ref: String,

    /// On-disk file served for `DIRTY` (`QWERTY_SH`). Relative paths are
    /// taken from the repository root.
    #[serde(rename = "qwerty_sh", default = "default_dirty_path")]
    pub dirty_path: PathBuf,
}

impl Settings {
    /// The default reference, with an empty value treated as unset.
    pub fn default_ref(&self) -> &str {
        match self.default_ref.trim() {
            "" => DEFAULT_REF,
            name => name,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_ref: default_ref(),
            dirty_path: default_dirty_path(),
        }
    }
}

fn default_ref() -> String {
    DEFAULT_REF.to_owned()
}

fn default_dirty_path() -> PathBuf {
    PathBuf::from(TARGET_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_ref(), "HEAD");
        assert_eq!(settings.dirty_path, PathBuf::from("qwerty.sh"));
    }

    #[test]
    fn test_empty_default_ref_is_head() {
        let settings = Settings {
            default_ref: "  ".into(),
            ..Settings::default()
        };
        assert_eq!(settings.default_ref(), "HEAD");

        let settings = Settings {
            default_ref: "main".into(),
            ..Settings::default()
        };
        assert_eq!(settings.default_ref(), "main");
    }

    #[test]
    fn test_loaded_from_environment() {
        let settings: Settings = qwerty_web::load_from([
            ("DEFAULT_GIT_REF", "v0.3"),
            ("QWERTY_SH", "/srv/qwerty/qwerty.sh"),
        ])
        .unwrap();
        assert_eq!(settings.default_ref(), "v0.3");
        assert_eq!(settings.dirty_path, PathBuf::from("/srv/qwerty/qwerty.sh"));
    }

    #[test]
    fn test_loaded_defaults() {
        let settings: Settings = qwerty_web::load_from([("HOME", "/root")]).unwrap();
        assert_eq!(settings.default_ref(), "HEAD");
        assert_eq!(settings.dirty_path, PathBuf::from("qwerty.sh"));

        let settings: Settings = qwerty_web::load_from([("DEFAULT_GIT_REF", "")]).unwrap();
        assert_eq!(settings.default_ref(), "HEAD");
    }
}
