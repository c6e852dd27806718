//! Registry listing parser.
//!
//! Official maps are described by a section of the registry listing
//! (`MPMaps.ini`) named after the map's base path:
//!
//! ```text
//! [Maps\Multiplayer\island]
//! Description=Island Fortress
//! GameModes=Standard,Meat Grinder
//! MaxPlayers=4
//! Size=0,0,50,50
//! LocalSize=2,4,46,40
//! PreviewSize=460,400
//! Waypoint0=60050
//! Waypoint1=45070
//! ```
//!
//! The map file itself (`<base path>.map`) must exist under the game
//! directory so its checksum can be computed.

use log::debug;

use crate::checksum::file_sha1;
use crate::error::Result;
use crate::ini::IniFile;
use crate::types::{MapDescriptor, MapRect, MapSource, PreviewSize, MAX_PLAYERS};

use super::coop::parse_coop_info;
use super::forced::{parse_forced_options, parse_spawn_ini_options};
use super::options::{game_relative_path, ParseOptions};
use super::values::{amount_override, expand_briefing, index_override};
use super::waypoint::waypoint_to_pixel;

/// Parse the registry section `base_path` into a descriptor.
///
/// If the section names a `BaseSection`, that section's keys are merged
/// underneath it first (filling gaps only), which is why the store is
/// borrowed mutably. Nothing is returned unless every field parsed.
pub fn parse_registry_map(
    ini: &mut IniFile,
    base_path: &str,
    options: &ParseOptions,
) -> Result<MapDescriptor> {
    let base_section = ini.get_string(base_path, "BaseSection", "");
    if !base_section.is_empty() {
        ini.combine_sections(&base_section, base_path)?;
    }
    let ini = &*ini;
    let section = base_path;

    let mut map = MapDescriptor::new(base_path, MapSource::Registry);

    map.name = ini.get_string(section, "Description", "Unnamed map");
    map.author = ini.get_string(section, "Author", "Unknown author");
    map.game_modes = ini
        .get_string(section, "GameModes", "Default")
        .split(',')
        .map(str::to_string)
        .collect();
    map.min_players = ini.get_int(section, "MinPlayers", 0);
    map.max_players = ini.get_int(section, "MaxPlayers", 0);
    map.enforce_max_players = ini.get_bool(section, "EnforceMaxPlayers", false);

    let relative = game_relative_path(base_path);
    let default_preview = format!(
        "{}.png",
        relative
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
    );
    let preview_image = ini.get_string(section, "PreviewImage", &default_preview);
    map.preview_path = Some(
        relative
            .parent()
            .map(|dir| dir.join(game_relative_path(&preview_image)))
            .unwrap_or_else(|| game_relative_path(&preview_image)),
    );

    map.briefing = expand_briefing(&ini.get_string(section, "Briefing", ""));
    map.checksum = file_sha1(&options.resolve(game_relative_path(&format!("{}.map", base_path))))?;

    map.credits = amount_override(ini.get_int(section, "Credits", -1));
    map.unit_count = amount_override(ini.get_int(section, "UnitCount", -1));
    map.neutral_house_color = index_override(ini.get_int(section, "NeutralColor", -1));
    map.special_house_color = index_override(ini.get_int(section, "SpecialColor", -1));

    if ini.get_bool(section, "IsCoopMission", false) {
        map.coop = Some(parse_coop_info(ini, section)?);
    }

    let local_size = MapRect::parse(&ini.get_string(section, "LocalSize", "0,0,0,0"), "LocalSize")?;
    let size = MapRect::parse(&ini.get_string(section, "Size", "0,0,0,0"), "Size")?;
    let preview_size =
        PreviewSize::parse(&ini.get_string(section, "PreviewSize", "0,0"), "PreviewSize")?;

    for i in 0..MAX_PLAYERS {
        let waypoint = ini.get_string(section, &format!("Waypoint{}", i), "");
        if waypoint.is_empty() {
            break;
        }
        map.starting_locations
            .push(waypoint_to_pixel(&waypoint, &size, &local_size, &preview_size)?);
    }

    let forced_section = ini.get_string(section, "ForcedOptions", "");
    if !forced_section.is_empty() {
        map.forced_options = parse_forced_options(ini, &forced_section);
    }

    let spawn_section = ini.get_string(section, "ForcedSpawnIniOptions", "");
    if !spawn_section.is_empty() {
        map.forced_spawn_ini_options = parse_spawn_ini_options(ini, &spawn_section);
    }

    if options.preload_previews {
        map.load_preview(options);
    }

    debug!(
        "Parsed map {} ({}, {} starting locations)",
        base_path,
        map.name,
        map.starting_locations.len()
    );

    Ok(map)
}
