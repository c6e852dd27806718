//! Shared command context: configuration and single-map loading.

use std::path::{Path, PathBuf};

use crate::catalog::is_map_file;
use crate::error::{MapError, Result};
use crate::ini::IniFile;
use crate::manifest::Manifest;
use crate::parser::{parse_custom_map, parse_registry_map, ParseOptions};
use crate::types::MapDescriptor;

/// Resolved configuration for a command run.
#[derive(Debug, Clone)]
pub struct Context {
    pub manifest: Manifest,
    pub options: ParseOptions,
}

impl Context {
    /// Resolve the manifest from `--config`, `./mapinfo.yaml`, or defaults,
    /// then apply `--game-path`.
    pub fn resolve(config: Option<&Path>, game_path: Option<PathBuf>) -> Result<Self> {
        let mut manifest = match config {
            Some(path) => Manifest::load(path)?,
            None => Manifest::discover(Path::new("."))?,
        };

        if let Some(game_path) = game_path {
            manifest.game_path = game_path;
        }

        Ok(Self::from_manifest(manifest))
    }

    pub fn from_manifest(manifest: Manifest) -> Self {
        let options = manifest.parse_options();
        Self { manifest, options }
    }

    /// Load one map.
    ///
    /// `target` is either a path to a raw `.map` file or the base path of a
    /// map listed in the registry.
    pub fn load_map(&self, target: &str) -> Result<MapDescriptor> {
        let path = Path::new(target);
        if is_map_file(path) && path.is_file() {
            return parse_custom_map(path);
        }

        let mut registry = IniFile::load(&self.manifest.registry_path())?;
        if !registry.has_section(target) {
            return Err(MapError::Config {
                message: format!("Map '{}' is not in the registry", target),
                help: Some(format!(
                    "Pass a registry base path such as Maps\\Multiplayer\\name, or a .map file; registry: {}",
                    self.manifest.registry_path().display()
                )),
            });
        }

        parse_registry_map(&mut registry, target, &self.options)
    }
}
