//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use warpack_core::{application::ports::Filesystem, error::WarpackResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WarpackResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> WarpackResult<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }

        // `fs::copy` truncates an existing destination.
        std::fs::copy(source, destination)
            .map(|_| ())
            .map_err(|e| {
                map_io_error(
                    destination,
                    e,
                    &format!("copy from {}", source.display()),
                )
            })
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> warpack_core::error::WarpackError {
    use warpack_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
