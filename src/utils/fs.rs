use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Whole-file text access used by the editor
pub trait TextStore: Send + Sync {
    /// Read a file's full contents as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's full contents
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl TextStore for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }

    // Parent directories are never created; the target must already be reachable.
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        debug!("Writing {} bytes to file: {}", content.len(), path.display());
        fs::write(path, content)
    }
}
