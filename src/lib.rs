//! mapinfo - Multiplayer map descriptors for a Tiberian Sun-style game client
//!
//! A library for reading map descriptors out of the map registry listing and
//! raw `.map` files, converting waypoints to preview coordinates, and
//! generating the spawn configuration handed to the game at launch.

pub mod catalog;
pub mod checksum;
pub mod cli;
pub mod error;
pub mod ini;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod preview;
pub mod spawn;
pub mod types;

pub use catalog::{MapCatalog, MapFailure};
pub use error::{MapError, Result};
pub use ini::{IniFile, IniSection};
pub use manifest::Manifest;
pub use parser::{
    classify_forced_option, parse_coop_info, parse_custom_map, parse_custom_map_ini,
    parse_registry_map, waypoint_to_pixel, ParseOptions,
};
pub use preview::{render_start_markers, write_png};
pub use spawn::{apply_spawn_ini, generate_spawn_ini, SpawnParams};
pub use types::{
    CoopHouseInfo, CoopMapInfo, ForcedOptions, ForcedValue, MapDescriptor, MapRect, MapSource,
    PreviewSize, StartingLocation,
};
