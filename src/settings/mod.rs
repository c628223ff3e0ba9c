pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::Scope;

/// Per-user preferences kept in the platform config directory.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// Directory holding `products.json` and the `assets/` folders.
    #[serde(default)]
    pub catalog_root: Option<PathBuf>,
    /// Restored on startup when it still exists.
    #[serde(default)]
    pub last_scope: Option<Scope>,
}

impl AppSettings {
    /// Command line wins, then the saved setting, then the working directory.
    pub fn resolve_catalog_root(&self, cli_root: Option<&Path>) -> PathBuf {
        cli_root
            .map(Path::to_path_buf)
            .or_else(|| self.catalog_root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
