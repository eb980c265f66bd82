//! Ignore patterns value object
//!
//! Handles loading and matching `.hubignore` patterns using gitignore semantics.
//! Patterns from the configuration file are layered on top of the file's.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the ignore file, looked up at the project root
pub const IGNORE_FILE_NAME: &str = ".hubignore";

/// Maximum file size for `.hubignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled ignore list.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching. Paths
/// are matched relative to the root the patterns were built for.
#[derive(Debug)]
pub struct IgnorePatterns {
    root: PathBuf,
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            root: PathBuf::new(),
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Load `.hubignore` from `root` and append `extra` patterns.
    ///
    /// A missing file is not an error.
    pub fn load(root: &Path, extra: &[String]) -> Result<Self, IgnoreError> {
        let ignore_path = root.join(IGNORE_FILE_NAME);

        let content = if ignore_path.exists() {
            let metadata = fs::metadata(&ignore_path).map_err(IgnoreError::Io)?;
            if metadata.len() > MAX_FILE_SIZE {
                return Err(IgnoreError::FileTooLarge {
                    path: ignore_path,
                    size: metadata.len(),
                    limit: MAX_FILE_SIZE,
                });
            }
            fs::read_to_string(&ignore_path).map_err(IgnoreError::Io)?
        } else {
            String::new()
        };

        let mut combined = content;
        for pattern in extra {
            combined.push('\n');
            combined.push_str(pattern);
        }

        Self::from_content(root, &ignore_path, &combined)
    }

    /// Parse patterns from string content.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    path: source_path.to_path_buf(),
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), trimmed) {
                return Err(IgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            root: root.to_path_buf(),
            matcher,
            pattern_count,
        })
    }

    /// Check if a path should be ignored.
    ///
    /// Accepts absolute paths under the pattern root or paths relative to it.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        if relative.as_os_str().is_empty() || relative.has_root() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(relative, is_dir)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when loading ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// The `.hubignore` file exceeds the size limit.
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
    /// Too many patterns in total.
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
    /// IO error reading the file.
    Io(std::io::Error),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooLarge { path, size, limit } => write!(
                f,
                "{} exceeds {}KB limit ({} bytes): {}",
                IGNORE_FILE_NAME,
                limit / 1024,
                size,
                path.display()
            ),
            Self::TooManyPatterns { path, count, limit } => write!(
                f,
                "{} has {} patterns, exceeds {} limit: {}",
                IGNORE_FILE_NAME,
                count,
                limit,
                path.display()
            ),
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => write!(
                f,
                "invalid ignore pattern at {}:{}: '{}' - {}",
                path.display(),
                line,
                pattern,
                message
            ),
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
            Self::Io(e) => write!(f, "IO error reading {}: {}", IGNORE_FILE_NAME, e),
        }
    }
}

impl std::error::Error for IgnoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
