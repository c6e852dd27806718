//! Cooperative mission info.
//!
//! Enemy houses are declared as `EnemyHouse0`, `EnemyHouse1`, ... with a
//! `side,color,startingLocation` triple each. The list ends at the first
//! missing or empty key.

use log::warn;

use crate::error::{MapError, Result};
use crate::ini::IniFile;
use crate::types::{CoopHouseInfo, CoopMapInfo};

use super::values::parse_int_list;

/// Upper bound on the `EnemyHouseN` scan.
pub const MAX_ENEMY_HOUSES: usize = 64;

/// Build the cooperative info from the keys of `section`.
pub fn parse_coop_info(ini: &IniFile, section: &str) -> Result<CoopMapInfo> {
    let mut info = CoopMapInfo::new();

    let sides = ini.get_string(section, "DisallowedPlayerSides", "");
    info.disallowed_player_sides = parse_int_list(&sides, "DisallowedPlayerSides")?
        .into_iter()
        .collect();

    let colors = ini.get_string(section, "DisallowedPlayerColors", "");
    info.disallowed_player_colors = parse_int_list(&colors, "DisallowedPlayerColors")?
        .into_iter()
        .collect();

    for i in 0..MAX_ENEMY_HOUSES {
        let key = format!("EnemyHouse{}", i);
        let values = parse_int_list(&ini.get_string(section, &key, ""), &key)?;

        if values.is_empty() {
            return Ok(info);
        }

        let [side, color, starting_location, ..] = values[..] else {
            return Err(MapError::Parse {
                message: format!("{}: expected side,color,startingLocation", key),
                help: Some(format!("Write {} as three comma-separated integers", key)),
            });
        };

        info.enemy_houses
            .push(CoopHouseInfo::new(side, color, starting_location));
    }

    if ini.get(section, &format!("EnemyHouse{}", MAX_ENEMY_HOUSES)).is_some() {
        warn!(
            "[{}]: only the first {} enemy houses are read",
            section, MAX_ENEMY_HOUSES
        );
    }

    Ok(info)
}
