//! Catalog loading against the fixture game directory.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use mapinfo::catalog::MapCatalog;
use mapinfo::{ForcedValue, MapSource, ParseOptions, StartingLocation};

fn game_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("game")
}

fn load_catalog() -> MapCatalog {
    let options = ParseOptions::new(game_dir());
    let mut catalog = MapCatalog::new();
    catalog
        .load_registry_file(&options.resolve("INI/MPMaps.ini"), &options)
        .unwrap();
    catalog.load_custom_maps(&options.resolve("Maps/Custom"));
    catalog
}

#[test]
fn test_registry_and_custom_maps_load() {
    let catalog = load_catalog();

    let names: Vec<&str> = catalog.maps().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["Island Fortress", "Outpost Siege", "Twin Rivers"]);
}

#[test]
fn test_failures_do_not_stop_loading() {
    let catalog = load_catalog();

    let failed: Vec<&str> = catalog.failures().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0], "Maps\\Multiplayer\\missing");
    assert!(failed[1].ends_with("crowded.MAP"));
}

#[test]
fn test_base_section_fills_registry_map() {
    let catalog = load_catalog();
    let island = catalog.find("Maps\\Multiplayer\\island").unwrap();

    assert_eq!(island.source(), MapSource::Registry);
    assert_eq!(island.author(), "Westwood");
    assert_eq!(island.game_modes(), &["Standard".to_string(), "Meat Grinder".to_string()]);
    assert_eq!(island.credits(), Some(10000));
    assert!(island.enforce_max_players());
    assert_eq!(
        island.starting_locations(),
        &[StartingLocation::new(175, 255), StartingLocation::new(175, 255)]
    );
    assert_eq!(island.forced_options().get("chkShortGame"), Some(ForcedValue::CheckBox(true)));
    assert_eq!(island.forced_options().get("cmbGameSpeed"), Some(ForcedValue::DropDown(2)));
    assert_eq!(
        island.forced_spawn_ini_options(),
        &[("MultiEngineer".to_string(), "no".to_string())]
    );
    assert_eq!(island.checksum(), "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709");
}

#[test]
fn test_coop_registry_map() {
    let catalog = load_catalog();
    let outpost = catalog.find("Maps\\Multiplayer\\outpost").unwrap();

    let coop = outpost.coop_info().unwrap();
    assert_eq!(coop.enemy_house_count(), 2);
    assert!(coop.is_side_disallowed(1));
    assert!(!coop.is_color_disallowed(1));
    assert_eq!(outpost.neutral_house_color(), Some(3));
    assert_eq!(outpost.special_house_color(), Some(4));
    assert_eq!(outpost.starting_locations(), &[StartingLocation::new(121, -33)]);
    assert_eq!(outpost.briefing(), "Hold the outpost.\nReinforcements arrive at dawn.");
    assert_eq!(outpost.checksum(), "2E3012BB2436013FD529B9C30D531F580F974F6B");
}

#[test]
fn test_custom_map_file() {
    let catalog = load_catalog();
    let twin = catalog
        .maps()
        .iter()
        .find(|m| m.source() == MapSource::Custom)
        .unwrap();

    assert_eq!(twin.game_modes(), &["Standard".to_string(), "Meat grinder".to_string()]);
    assert!(twin.enforce_max_players());
    assert_eq!(twin.unit_count(), Some(3));
    assert_eq!(twin.credits(), None);
    assert_eq!(
        twin.starting_locations(),
        &[StartingLocation::new(0, 0), StartingLocation::new(10, 10)]
    );
    assert_eq!(
        twin.forced_options().get("chkBuildOffAlly"),
        Some(ForcedValue::CheckBox(false))
    );
    assert_eq!(twin.checksum(), "927F0D0F8D849B8EE4240EFDBB2496848BF8BE7E");
}

#[test]
fn test_game_mode_index() {
    let catalog = load_catalog();

    assert_eq!(catalog.game_modes(), vec!["Standard", "Meat Grinder", "Coop"]);

    let standard: Vec<&str> = catalog
        .maps_for_game_mode("standard")
        .map(|m| m.name())
        .collect();
    assert_eq!(standard, vec!["Island Fortress", "Twin Rivers"]);
}

#[test]
fn test_coop_info_json() {
    let catalog = load_catalog();
    let outpost = catalog.find("Maps\\Multiplayer\\outpost").unwrap();

    insta::assert_json_snapshot!(outpost.coop_info().unwrap(), @r#"
    {
      "disallowed_player_sides": [
        1
      ],
      "disallowed_player_colors": [],
      "enemy_houses": [
        {
          "side": 1,
          "color": 2,
          "starting_location": 3
        },
        {
          "side": 4,
          "color": 5,
          "starting_location": 6
        }
      ]
    }
    "#);
}
