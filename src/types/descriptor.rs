//! The map descriptor.
//!
//! A `MapDescriptor` is produced by one of the two parser entry points in
//! [`crate::parser`] and is read-only afterwards, apart from attaching a
//! lazily loaded preview image.
//!
//! Optional numeric overrides (`Credits`, `UnitCount`, `NeutralColor`,
//! `SpecialColor`) are `Option<i32>`; the `-1` "unset" marker of the source
//! files never leaves the parser.

use std::path::PathBuf;

use image::RgbaImage;
use serde::Serialize;

use super::coop::CoopMapInfo;
use super::forced::ForcedOptions;
use super::geometry::StartingLocation;

/// Maximum number of player starting locations a map can declare.
pub const MAX_PLAYERS: usize = 8;

/// Which input shape a descriptor was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSource {
    /// A section of the central map registry listing.
    Registry,
    /// A raw map file dropped into the custom maps directory.
    Custom,
}

/// A fully parsed multiplayer map.
#[derive(Debug, Clone, Serialize)]
pub struct MapDescriptor {
    pub(crate) source: MapSource,
    pub(crate) base_path: String,
    pub(crate) name: String,
    pub(crate) author: String,
    pub(crate) game_modes: Vec<String>,
    pub(crate) checksum: String,

    pub(crate) min_players: i32,
    pub(crate) max_players: i32,
    pub(crate) enforce_max_players: bool,

    pub(crate) briefing: String,
    pub(crate) preview_path: Option<PathBuf>,
    pub(crate) extract_custom_preview: bool,
    #[serde(skip)]
    pub(crate) preview: Option<RgbaImage>,

    pub(crate) credits: Option<i32>,
    pub(crate) unit_count: Option<i32>,
    pub(crate) neutral_house_color: Option<i32>,
    pub(crate) special_house_color: Option<i32>,

    pub(crate) coop: Option<CoopMapInfo>,
    pub(crate) forced_options: ForcedOptions,
    pub(crate) forced_spawn_ini_options: Vec<(String, String)>,
    pub(crate) starting_locations: Vec<StartingLocation>,
}

impl MapDescriptor {
    /// Create an empty descriptor bound to a base path.
    pub(crate) fn new(base_path: impl Into<String>, source: MapSource) -> Self {
        Self {
            source,
            base_path: base_path.into(),
            name: String::new(),
            author: String::new(),
            game_modes: Vec::new(),
            checksum: String::new(),
            min_players: 0,
            max_players: 0,
            enforce_max_players: false,
            briefing: String::new(),
            preview_path: None,
            extract_custom_preview: true,
            preview: None,
            credits: None,
            unit_count: None,
            neutral_house_color: None,
            special_house_color: None,
            coop: None,
            forced_options: ForcedOptions::new(),
            forced_spawn_ini_options: Vec::new(),
            starting_locations: Vec::new(),
        }
    }

    pub fn source(&self) -> MapSource {
        self.source
    }

    /// Base path: the registry section name, or the raw file path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Game modes the map is listed for, in declared order.
    pub fn game_modes(&self) -> &[String] {
        &self.game_modes
    }

    /// Check if the map is listed for a game mode (case-insensitive).
    pub fn supports_game_mode(&self, mode: &str) -> bool {
        self.game_modes.iter().any(|m| m.eq_ignore_ascii_case(mode))
    }

    /// SHA-1 of the underlying map file, uppercase hex.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn min_players(&self) -> i32 {
        self.min_players
    }

    pub fn max_players(&self) -> i32 {
        self.max_players
    }

    /// Whether `max_players` limits the lobby size, rather than only the
    /// number of starting waypoints players are randomized to.
    pub fn enforce_max_players(&self) -> bool {
        self.enforce_max_players
    }

    pub fn briefing(&self) -> &str {
        &self.briefing
    }

    /// Preview image path relative to the game directory.
    pub fn preview_path(&self) -> Option<&PathBuf> {
        self.preview_path.as_ref()
    }

    pub fn extract_custom_preview(&self) -> bool {
        self.extract_custom_preview
    }

    /// Disable or re-enable preview extraction for this map.
    pub fn set_extract_custom_preview(&mut self, extract: bool) {
        self.extract_custom_preview = extract;
    }

    /// The loaded preview image, if any.
    pub fn preview(&self) -> Option<&RgbaImage> {
        self.preview.as_ref()
    }

    pub fn credits(&self) -> Option<i32> {
        self.credits
    }

    pub fn unit_count(&self) -> Option<i32> {
        self.unit_count
    }

    pub fn neutral_house_color(&self) -> Option<i32> {
        self.neutral_house_color
    }

    pub fn special_house_color(&self) -> Option<i32> {
        self.special_house_color
    }

    pub fn is_coop(&self) -> bool {
        self.coop.is_some()
    }

    pub fn coop_info(&self) -> Option<&CoopMapInfo> {
        self.coop.as_ref()
    }

    pub fn forced_options(&self) -> &ForcedOptions {
        &self.forced_options
    }

    /// Key/value pairs copied verbatim into the spawn `Settings` section.
    pub fn forced_spawn_ini_options(&self) -> &[(String, String)] {
        &self.forced_spawn_ini_options
    }

    /// Player starting locations in slot order.
    pub fn starting_locations(&self) -> &[StartingLocation] {
        &self.starting_locations
    }
}
