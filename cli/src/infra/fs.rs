//! Filesystem infrastructure: implements the `LocalFs` port.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production filesystem probe backed by `std::fs` metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl LocalFs for HostFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
