//! Map catalog: every map the client knows about.
//!
//! Official maps are listed in the `[MultiMaps]` section of the registry
//! listing, one base path per key. Custom maps are raw `.map` files found
//! under the custom maps directory. A map that fails to parse is logged and
//! recorded as a failure; it never stops the rest of the catalog loading.
//!
//! # Example
//!
//! ```ignore
//! use mapinfo::catalog::MapCatalog;
//! use mapinfo::parser::ParseOptions;
//!
//! let options = ParseOptions::new("/games/dta");
//! let mut catalog = MapCatalog::new();
//! catalog.load_registry_file(&options.resolve("INI/MPMaps.ini"), &options)?;
//! catalog.load_custom_maps(&options.resolve("Maps/Custom"));
//!
//! for map in catalog.maps_for_game_mode("Standard") {
//!     println!("{}", map.name());
//! }
//! ```

mod scanner;

use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::ini::IniFile;
use crate::parser::{parse_custom_map, parse_registry_map, ParseOptions};
use crate::types::MapDescriptor;

pub use scanner::{is_map_file, scan_custom_maps, MAP_EXTENSION};

/// Registry section listing the official maps.
pub const MAP_LIST_SECTION: &str = "MultiMaps";

/// A map that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFailure {
    /// Base path of the map (registry section or file path).
    pub path: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Loaded maps and load failures, in load order.
#[derive(Debug, Default)]
pub struct MapCatalog {
    maps: Vec<MapDescriptor>,
    failures: Vec<MapFailure>,
}

impl MapCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every map listed in `[MultiMaps]` of an already parsed registry.
    pub fn load_registry(&mut self, registry: &mut IniFile, options: &ParseOptions) {
        let base_paths: Vec<String> = registry
            .section(MAP_LIST_SECTION)
            .map(|section| {
                section
                    .entries()
                    .map(|(_, path)| path.trim().to_string())
                    .filter(|path| !path.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if base_paths.is_empty() {
            warn!("Registry has no [{}] entries", MAP_LIST_SECTION);
        }

        for base_path in base_paths {
            if self.find(&base_path).is_some() {
                self.fail(base_path, "listed more than once".to_string());
                continue;
            }

            match parse_registry_map(registry, &base_path, options) {
                Ok(map) => self.maps.push(map),
                Err(e) => self.fail(base_path, e.to_string()),
            }
        }
    }

    /// Load the registry listing from disk and add its maps.
    ///
    /// Only a missing or unreadable registry file is an error.
    pub fn load_registry_file(&mut self, path: &Path, options: &ParseOptions) -> Result<()> {
        let mut registry = IniFile::load(path)?;
        self.load_registry(&mut registry, options);
        info!(
            "Loaded {} map(s) from {}",
            self.maps.len(),
            path.display()
        );
        Ok(())
    }

    /// Add every raw map file found under `dir`.
    pub fn load_custom_maps(&mut self, dir: &Path) {
        for path in scan_custom_maps(dir) {
            let base_path = path.to_string_lossy().into_owned();
            if self.find(&base_path).is_some() {
                continue;
            }

            match parse_custom_map(&path) {
                Ok(map) => self.maps.push(map),
                Err(e) => self.fail(base_path, e.to_string()),
            }
        }
    }

    fn fail(&mut self, path: String, reason: String) {
        warn!("Setting info for {} failed! Reason: {}", path, reason);
        self.failures.push(MapFailure { path, reason });
    }

    /// Successfully loaded maps.
    pub fn maps(&self) -> &[MapDescriptor] {
        &self.maps
    }

    /// Maps that failed to load.
    pub fn failures(&self) -> &[MapFailure] {
        &self.failures
    }

    /// Find a map by base path.
    pub fn find(&self, base_path: &str) -> Option<&MapDescriptor> {
        self.maps.iter().find(|m| m.base_path() == base_path)
    }

    /// Find a map by base path for mutation (e.g. to attach a preview).
    pub fn find_mut(&mut self, base_path: &str) -> Option<&mut MapDescriptor> {
        self.maps.iter_mut().find(|m| m.base_path() == base_path)
    }

    /// Distinct game modes in first-seen order.
    pub fn game_modes(&self) -> Vec<&str> {
        let mut modes: Vec<&str> = Vec::new();
        for mode in self.maps.iter().flat_map(|m| m.game_modes()) {
            if !modes.iter().any(|m| m.eq_ignore_ascii_case(mode)) {
                modes.push(mode.as_str());
            }
        }
        modes
    }

    /// Maps listed for a game mode (case-insensitive).
    pub fn maps_for_game_mode<'a>(&'a self, mode: &'a str) -> impl Iterator<Item = &'a MapDescriptor> + 'a {
        self.maps.iter().filter(move |m| m.supports_game_mode(mode))
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
