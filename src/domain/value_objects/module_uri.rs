//! Module URI value object
//!
//! Remote module URIs are derived from a file's path relative to the module
//! root: always absolute, always forward slashes.

use std::fmt;
use std::path::{Component, Path};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleUri(String);

impl ModuleUri {
    /// Derive the URI of `path` under `root`.
    ///
    /// Returns `None` when `path` is not inside `root` or contains `..`.
    pub fn from_relative(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let mut uri = String::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    uri.push('/');
                    uri.push_str(&segment.to_string_lossy());
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        if uri.is_empty() {
            return None;
        }
        Some(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_is_root_relative_with_leading_slash() {
        let uri = ModuleUri::from_relative(
            Path::new("/proj/plugins"),
            Path::new("/proj/plugins/ext/lib/util.sjs"),
        )
        .unwrap();
        assert_eq!(uri.as_str(), "/ext/lib/util.sjs");
    }

    #[test]
    fn path_outside_root_has_no_uri() {
        assert!(
            ModuleUri::from_relative(Path::new("/proj/plugins"), Path::new("/proj/other.sjs"))
                .is_none()
        );
    }

    #[test]
    fn root_itself_has_no_uri() {
        assert!(
            ModuleUri::from_relative(Path::new("/proj/plugins"), Path::new("/proj/plugins"))
                .is_none()
        );
    }

    #[test]
    fn traversal_is_rejected() {
        assert!(ModuleUri::from_relative(
            Path::new("/proj/plugins"),
            Path::new("/proj/plugins/../secrets.txt")
        )
        .is_none());
    }
}
