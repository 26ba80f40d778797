use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::icon::{default_set, IconSlot, Palette};

/// Icon set configuration stored as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Background and accent colors.
    #[serde(default)]
    pub palette: Palette,
    /// Slots to render, in order.
    #[serde(default = "default_set")]
    pub slots: Vec<IconSlot>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            slots: default_set(),
        }
    }
}

impl AppConfig {
    /// Default output directory: `src-tauri/icons` next to this crate.
    ///
    /// The crate root is baked in at build time, so an installed or moved
    /// binary still writes into the source tree it was built from. Use
    /// `--base-dir` to target anything else.
    pub fn default_output_dir() -> PathBuf {
        Self::output_dir_for(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src-tauri"))
    }

    /// Icons live in `<base>/icons`.
    pub fn output_dir_for(base: &Path) -> PathBuf {
        base.join("icons")
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| IconError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::parse(&contents)?;
        tracing::info!("Config loaded from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| IconError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.slots.is_empty() {
            return Err(IconError::Config("no slots configured".into()));
        }
        for slot in &self.slots {
            slot.validate()?;
        }
        Ok(())
    }
}
