//! Client configuration (mapinfo.yaml) parsing.
//!
//! The manifest locates the game directory and its map sources, and holds
//! the preview loading policy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::parser::ParseOptions;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "mapinfo.yaml";

/// Configuration loaded from mapinfo.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Game root directory.
    #[serde(default = "default_game_path")]
    pub game_path: PathBuf,

    /// Registry listing, relative to the game directory.
    #[serde(default = "default_registry")]
    pub registry: PathBuf,

    /// Directory scanned for raw map files, relative to the game directory.
    #[serde(default = "default_custom_maps")]
    pub custom_maps: PathBuf,

    /// Load previews while parsing instead of on first use.
    #[serde(default)]
    pub preload_previews: bool,

    /// Fallback preview image, relative to the game directory.
    #[serde(default = "default_placeholder_preview")]
    pub placeholder_preview: PathBuf,
}

fn default_game_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_registry() -> PathBuf {
    PathBuf::from("INI/MPMaps.ini")
}

fn default_custom_maps() -> PathBuf {
    PathBuf::from("Maps/Custom")
}

fn default_placeholder_preview() -> PathBuf {
    PathBuf::from("Resources/nopreview.png")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            game_path: default_game_path(),
            registry: default_registry(),
            custom_maps: default_custom_maps(),
            preload_previews: false,
            placeholder_preview: default_placeholder_preview(),
        }
    }
}

impl Manifest {
    /// Load manifest from a mapinfo.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| MapError::Parse {
                message: format!("Invalid manifest: {}", e),
                help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
            })
    }

    /// Load `mapinfo.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute (or cwd-relative) path of the registry listing.
    pub fn registry_path(&self) -> PathBuf {
        self.game_path.join(&self.registry)
    }

    /// Absolute (or cwd-relative) path of the custom maps directory.
    pub fn custom_maps_path(&self) -> PathBuf {
        self.game_path.join(&self.custom_maps)
    }

    /// Parse options carrying this manifest's paths and policies.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            game_path: self.game_path.clone(),
            preload_previews: self.preload_previews,
            placeholder_preview: self.placeholder_preview.clone(),
        }
    }
}
