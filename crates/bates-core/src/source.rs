//! Sources of candidate PDF paths.

use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use tracing::{debug, warn};

use crate::error::Result;

/// Anything that can produce the list of PDF paths to process.
pub trait PdfSource {
    /// List candidate PDF paths. Existence is not checked.
    fn pdf_paths(&self) -> Result<Vec<PathBuf>>;
}

/// Recursive scan of a directory, skipping hidden entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScan {
    pub root: PathBuf,
}

/// Text file listing one PDF path per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFile {
    pub path: PathBuf,
}

/// Where the candidate paths come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    DirectoryScan(DirectoryScan),
    ListFile(ListFile),
}

impl PathSource {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::DirectoryScan(DirectoryScan { root: root.into() })
    }

    pub fn list_file(path: impl Into<PathBuf>) -> Self {
        Self::ListFile(ListFile { path: path.into() })
    }
}

impl PdfSource for PathSource {
    fn pdf_paths(&self) -> Result<Vec<PathBuf>> {
        match self {
            PathSource::DirectoryScan(scan) => scan.pdf_paths(),
            PathSource::ListFile(list) => list.pdf_paths(),
        }
    }
}

impl DirectoryScan {
    /// The directory actually walked; an empty root means the current directory.
    fn scan_root(&self) -> &Path {
        if self.root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.root
        }
    }

    fn glob_pattern(&self) -> String {
        let root = self.scan_root().to_string_lossy();
        let trimmed = root.trim_end_matches(['/', '\\']);
        // A root of "/" trims to nothing and must stay anchored at "/".
        format!("{}/**/*.pdf", Pattern::escape(trimmed))
    }
}

impl PdfSource for DirectoryScan {
    fn pdf_paths(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.glob_pattern();

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut paths = Vec::new();
        for entry in glob_with(&pattern, options)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if is_hidden(self.scan_root(), &path) {
                debug!("Skipping hidden path {}", path.display());
                continue;
            }

            if path.is_file() {
                paths.push(path);
            }
        }

        debug!("Found {} PDFs under {}", paths.len(), self.root.display());
        Ok(paths)
    }
}

impl PdfSource for ListFile {
    fn pdf_paths(&self) -> Result<Vec<PathBuf>> {
        let content = fs::read_to_string(&self.path)?;
        let paths: Vec<PathBuf> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.ends_with(".pdf"))
            .map(PathBuf::from)
            .collect();

        debug!("Read {} PDF paths from {}", paths.len(), self.path.display());
        Ok(paths)
    }
}

/// True when any segment of `path` below `root` starts with a period.
fn is_hidden(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
