//! Reading source documents and writing generated ones.
//!
//! Documents are always loaded whole and written whole. File writes go
//! through a temporary file in the destination directory and are renamed into
//! place, so a failed run never leaves a half-written document behind.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the source document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl InputSource {
    /// Interpret a CLI path, treating `-` as stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl OutputTarget {
    /// Interpret a CLI path, treating `-` as stdout.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Failures at the document I/O boundary.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("document unavailable: {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from stdin")]
    Stdin(#[source] io::Error),

    #[error("failed to write to stdout")]
    Stdout(#[source] io::Error),
}

/// Load the entire source document into memory.
pub fn read_document(source: &InputSource) -> Result<String, DocumentError> {
    match source {
        InputSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading document");
            std::fs::read_to_string(path).map_err(|source| DocumentError::Unavailable {
                path: path.clone(),
                source,
            })
        }
        InputSource::Stdin => {
            tracing::debug!("reading document from stdin");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(DocumentError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// Persist `content` verbatim to `target`.
pub fn write_document(target: &OutputTarget, content: &str) -> Result<(), DocumentError> {
    match target {
        OutputTarget::File(path) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "writing document");
            write_atomic(path, content).map_err(|source| DocumentError::WriteFailed {
                path: path.clone(),
                source,
            })
        }
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(DocumentError::Stdout)
        }
    }
}

fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    // Rename within the same directory, so the replacement is atomic.
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_dash() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(OutputTarget::from_arg(Path::new("-")), OutputTarget::Stdout);
        assert_eq!(
            InputSource::from_arg(Path::new("README.md.notoc")),
            InputSource::File(PathBuf::from("README.md.notoc"))
        );
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = InputSource::File(dir.path().join("missing.md"));
        let err = read_document(&source).unwrap_err();
        assert!(matches!(err, DocumentError::Unavailable { .. }));
        assert!(err.to_string().starts_with("document unavailable: "));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        write_document(&OutputTarget::File(path.clone()), "# Title\n## Table of Contents").unwrap();
        let content = read_document(&InputSource::File(path)).unwrap();
        assert_eq!(content, "# Title\n## Table of Contents");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "old content that is longer").unwrap();
        write_document(&OutputTarget::File(path.clone()), "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("README.md");
        let err = write_document(&OutputTarget::File(path), "x").unwrap_err();
        assert!(matches!(err, DocumentError::WriteFailed { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            OutputTarget::File(PathBuf::from("out.md")).to_string(),
            "out.md"
        );
    }
}
