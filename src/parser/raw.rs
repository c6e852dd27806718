//! Raw map file parser.
//!
//! Custom maps are plain map files carrying their lobby metadata in a
//! `[Basic]` section, with singular key names:
//!
//! ```text
//! [Basic]
//! Name=Twin Rivers
//! GameMode=standard, meat grinder
//! MinPlayer=2
//! MaxPlayer=6
//! ```
//!
//! Only the metadata sections are read; the rest of the file (terrain and
//! object payloads) is skipped.

use std::path::Path;

use log::debug;

use crate::checksum::file_sha1;
use crate::error::{MapError, Result};
use crate::ini::IniFile;
use crate::types::{MapDescriptor, MapSource, StartingLocation, MAX_PLAYERS};

use super::coop::parse_coop_info;
use super::forced::{parse_forced_options, parse_spawn_ini_options};
use super::values::{amount_override, expand_briefing, index_override};

/// Sections read from a raw map file.
pub const RAW_MAP_SECTIONS: &[&str] = &[
    "Basic",
    "Map",
    "Waypoints",
    "ForcedOptions",
    "ForcedSpawnIniOptions",
];

/// Spacing of the placeholder starting locations.
const PLACEHOLDER_SPACING: i32 = 10;

/// Parse a raw map file into a descriptor.
pub fn parse_custom_map(path: &Path) -> Result<MapDescriptor> {
    let ini = IniFile::load_sections(path, RAW_MAP_SECTIONS)?;
    let checksum = file_sha1(path)?;

    let mut map = parse_custom_map_ini(&ini, &path.to_string_lossy())?;
    map.checksum = checksum;

    debug!("Parsed custom map {} ({})", path.display(), map.name);

    Ok(map)
}

/// Build a custom map descriptor from already-loaded sections.
///
/// The checksum is left empty; [`parse_custom_map`] fills it from the file.
pub fn parse_custom_map_ini(ini: &IniFile, base_path: &str) -> Result<MapDescriptor> {
    let section = "Basic";
    let mut map = MapDescriptor::new(base_path, MapSource::Custom);

    map.name = ini.get_string(section, "Name", "Unnamed map");
    map.author = ini.get_string(section, "Author", "Unknown author");
    map.game_modes = ini
        .get_string(section, "GameMode", "Default")
        .split(',')
        .filter_map(normalize_game_mode)
        .collect();
    map.min_players = ini.get_int(section, "MinPlayer", 0);
    map.max_players = ini.get_int(section, "MaxPlayer", 0);
    map.enforce_max_players = ini.get_bool(section, "EnforceMaxPlayers", true);
    map.briefing = expand_briefing(&ini.get_string(section, "Briefing", ""));

    map.credits = amount_override(ini.get_int(section, "Credits", -1));
    map.unit_count = amount_override(ini.get_int(section, "UnitCount", -1));
    map.neutral_house_color = index_override(ini.get_int(section, "NeutralColor", -1));
    map.special_house_color = index_override(ini.get_int(section, "SpecialColor", -1));

    if ini.get_bool(section, "IsCoopMission", false) {
        map.coop = Some(parse_coop_info(ini, section)?);
    }

    map.starting_locations = placeholder_starting_locations(map.max_players)?;

    map.forced_options = parse_forced_options(ini, "ForcedOptions");
    map.forced_spawn_ini_options = parse_spawn_ini_options(ini, "ForcedSpawnIniOptions");

    Ok(map)
}

/// Trim a game mode and uppercase its first letter. Blank entries are dropped.
fn normalize_game_mode(mode: &str) -> Option<String> {
    let mode = mode.trim();
    let mut chars = mode.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Diagonal placeholder positions, one per player slot.
///
/// Custom maps have no computed preview geometry, so starting locations are
/// laid out at `(i * 10, i * 10)` until real preview support exists.
fn placeholder_starting_locations(max_players: i32) -> Result<Vec<StartingLocation>> {
    let count = usize::try_from(max_players).unwrap_or(0);
    if count > MAX_PLAYERS {
        return Err(MapError::Config {
            message: format!(
                "MaxPlayer={} exceeds the {} supported starting locations",
                max_players, MAX_PLAYERS
            ),
            help: Some(format!("Set MaxPlayer to at most {}", MAX_PLAYERS)),
        });
    }

    Ok((0..max_players.max(0))
        .map(|i| StartingLocation::new(i * PLACEHOLDER_SPACING, i * PLACEHOLDER_SPACING))
        .collect())
}
