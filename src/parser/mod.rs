//! Map descriptor parsing.
//!
//! Maps reach the client in two shapes, each with its own entry point:
//!
//! - [`parse_registry_map`] reads a section of the central registry listing,
//!   keyed by the map's base path.
//! - [`parse_custom_map`] reads the `[Basic]` metadata of a raw map file.
//!
//! The two share the cooperative info builder and the forced option
//! classifier, but keep their own key names and defaults. Both build the
//! descriptor locally and hand it out only when every field parsed.
//!
//! # Usage
//!
//! ```ignore
//! use mapinfo::ini::IniFile;
//! use mapinfo::parser::{parse_registry_map, ParseOptions};
//!
//! let options = ParseOptions::new("/games/dta");
//! let mut registry = IniFile::load(&options.resolve("INI/MPMaps.ini"))?;
//! let map = parse_registry_map(&mut registry, "Maps\\Multiplayer\\island", &options)?;
//! println!("{} by {}", map.name(), map.author());
//! ```

mod options;
mod raw;
mod registry;
pub mod coop;
pub mod forced;
pub mod values;
pub mod waypoint;

pub use coop::parse_coop_info;
pub use forced::{classify_forced_option, parse_forced_options, parse_spawn_ini_options};
pub use options::{game_relative_path, ParseOptions};
pub use raw::{parse_custom_map, parse_custom_map_ini, RAW_MAP_SECTIONS};
pub use registry::parse_registry_map;
pub use waypoint::{split_waypoint, waypoint_to_pixel};
