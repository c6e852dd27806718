//! Spawn configuration generation.
//!
//! The spawn configuration (`spawn.ini`) is handed to the game process when a
//! match starts. Maps contribute forced settings, starting credit and unit
//! overrides, and for cooperative maps the full set of AI enemy houses with
//! their alliances.
//!
//! House slots are numbered `Multi1..MultiN` for the human and AI players of
//! the lobby. Enemy houses of a cooperative map follow directly after, and
//! the neutral and special houses come after those.

use crate::error::{MapError, Result};
use crate::ini::IniFile;
use crate::types::MapDescriptor;

/// Ordinal key suffixes for alliance entries.
pub const HOUSE_ALLY_NAMES: [&str; 7] = ["One", "Two", "Three", "Four", "Five", "Six", "Seven"];

/// Lobby parameters for a spawn configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnParams {
    /// Human and AI players in the lobby.
    pub total_player_count: i32,
    /// AI players in the lobby.
    pub ai_player_count: i32,
    /// Handicap assigned to every cooperative enemy house.
    pub difficulty: i32,
}

impl SpawnParams {
    pub const fn new(total_player_count: i32, ai_player_count: i32, difficulty: i32) -> Self {
        Self {
            total_player_count,
            ai_player_count,
            difficulty,
        }
    }
}

/// Generate a fresh spawn configuration for `map`.
pub fn generate_spawn_ini(map: &MapDescriptor, params: &SpawnParams) -> Result<IniFile> {
    let mut spawn = IniFile::new();
    apply_spawn_ini(map, &mut spawn, params)?;
    Ok(spawn)
}

/// Write the map-derived keys of a spawn configuration into `spawn`.
///
/// Preconditions are checked before anything is written, so a rejected call
/// leaves `spawn` untouched.
pub fn apply_spawn_ini(map: &MapDescriptor, spawn: &mut IniFile, params: &SpawnParams) -> Result<()> {
    validate(map, params)?;

    for (key, value) in map.forced_spawn_ini_options() {
        spawn.set_string("Settings", key, value.as_str());
    }

    if let Some(credits) = map.credits() {
        spawn.set_int("Settings", "Credits", credits);
    }

    if let Some(unit_count) = map.unit_count() {
        spawn.set_int("Settings", "UnitCount", unit_count);
    }

    let mut neutral_house_index = params.total_player_count + 1;
    let mut special_house_index = params.total_player_count + 2;

    if let Some(coop) = map.coop_info() {
        let houses = &coop.enemy_houses;
        let house_count = to_i32(houses.len())?;

        for (i, house) in houses.iter().enumerate() {
            let multi_id = params.total_player_count + to_i32(i)? + 1;
            let key = format!("Multi{}", multi_id);

            spawn.set_int("HouseHandicaps", &key, params.difficulty);
            spawn.set_int("HouseCountries", &key, house.side);
            spawn.set_int("HouseColors", &key, house.color);
            spawn.set_int("SpawnLocations", &key, house.starting_location);

            let alliances = format!("{}_Alliances", key);
            let mut ally_index = 0;

            for enemy_index in 0..houses.len() {
                if enemy_index == i {
                    continue;
                }

                // Allies are referenced one below their own slot number.
                let ally_multi_id = params.total_player_count + to_i32(enemy_index)?;
                spawn.set_int(&alliances, &house_ally_key(ally_index)?, ally_multi_id);
                ally_index += 1;
            }
        }

        spawn.set_int(
            "Settings",
            "AIPlayers",
            params.ai_player_count + house_count,
        );

        neutral_house_index += house_count;
        special_house_index += house_count;
    }

    if let Some(color) = map.neutral_house_color() {
        spawn.set_int("HouseColors", &format!("Multi{}", neutral_house_index), color);
    }

    if let Some(color) = map.special_house_color() {
        spawn.set_int("HouseColors", &format!("Multi{}", special_house_index), color);
    }

    Ok(())
}

/// Alliance key for the `index`-th ally (`HouseAllyOne`, `HouseAllyTwo`, ...).
pub fn house_ally_key(index: usize) -> Result<String> {
    HOUSE_ALLY_NAMES
        .get(index)
        .map(|name| format!("HouseAlly{}", name))
        .ok_or_else(|| MapError::Config {
            message: format!(
                "A house can have at most {} allies, ally #{} requested",
                HOUSE_ALLY_NAMES.len(),
                index + 1
            ),
            help: None,
        })
}

fn validate(map: &MapDescriptor, params: &SpawnParams) -> Result<()> {
    if params.total_player_count < 0 || params.ai_player_count < 0 {
        return Err(MapError::config(format!(
            "Player counts must not be negative (total {}, AI {})",
            params.total_player_count, params.ai_player_count
        )));
    }

    let houses = map.coop_info().map_or(0, |coop| coop.enemy_house_count());
    if houses > HOUSE_ALLY_NAMES.len() + 1 {
        return Err(MapError::Config {
            message: format!(
                "Map {} declares {} enemy houses; at most {} can be allied",
                map.base_path(),
                houses,
                HOUSE_ALLY_NAMES.len() + 1
            ),
            help: Some("Remove EnemyHouse entries from the map".to_string()),
        });
    }

    // The special house takes the last slot, after every enemy house.
    let houses = to_i32(houses)?;
    let last_slot = params
        .total_player_count
        .checked_add(houses)
        .and_then(|slot| slot.checked_add(2));
    let ai_players = params.ai_player_count.checked_add(houses);

    if last_slot.is_none() || ai_players.is_none() {
        return Err(MapError::Config {
            message: format!(
                "Player counts out of range (total {}, AI {}, enemy houses {})",
                params.total_player_count, params.ai_player_count, houses
            ),
            help: Some("Pass player counts that fit the lobby".to_string()),
        });
    }

    Ok(())
}

fn to_i32(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| MapError::config(format!("House index {} is out of range", value)))
}
