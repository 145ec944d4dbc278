//! Infrastructure implementation of the `ManifestStore` port.

use std::path::Path;

use crate::application::ports::ManifestStore;
use crate::domain::{ConfigError, Manifest};

/// Loads the agent manifest from a JSON file, or yields the built-in agents
/// when no path is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestStore;

impl ManifestStore for JsonManifestStore {
    fn load(&self, path: Option<&Path>) -> Result<Manifest, ConfigError> {
        let Some(path) = path else {
            return Ok(Manifest::builtin());
        };
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(shown));
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let manifest: Manifest = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: shown,
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), agents = manifest.len(), "loaded manifest");
        Ok(manifest)
    }
}
