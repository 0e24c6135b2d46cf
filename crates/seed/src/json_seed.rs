//! JSON file seed source.
//!
//! Reads the whole seed document from one JSON file. The built-in seed can be
//! exported to a file as a starting point for customization.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::data::SeedData;
use crate::source::{Result, SeedError, SeedSource};

/// Seed loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSeed {
    path: PathBuf,
}

impl JsonSeed {
    /// Point at a seed file. Nothing is read until `load`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the seed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `seed` to `path` as pretty JSON, creating parent directories.
    pub async fn export(path: impl AsRef<Path>, seed: &SeedData) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(seed)?;
        fs::write(path, json.as_bytes()).await?;
        info!("Seed exported to {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl SeedSource for JsonSeed {
    async fn load(&self) -> Result<SeedData> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SeedError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let seed: SeedData = serde_json::from_str(&content)?;
        seed.validate()?;
        debug!(
            "Loaded seed from {}: {} rules, {} levels, {} achievements",
            self.path.display(),
            seed.chat.rules.len(),
            seed.levels.len(),
            seed.achievements.len()
        );
        Ok(seed)
    }
}
