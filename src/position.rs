use std::fs;
use std::path::PathBuf;

use tracing::warn;

/// External channel holding the position token: the decimal slide index,
/// no prefix. The token mirrors controller state and is only authoritative
/// at startup.
pub trait PositionStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, index: usize);
}

/// Token persisted to a sidecar file next to the deck.
pub struct FilePosition {
    path: PathBuf,
}

impl FilePosition {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PositionStore for FilePosition {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, index: usize) {
        // Navigation itself never fails on a store error.
        if let Err(e) = fs::write(&self.path, index.to_string()) {
            warn!("failed to persist position to {}: {e}", self.path.display());
        }
    }
}
