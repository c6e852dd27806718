//! Benchmarks for map parsing and spawn generation.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mapinfo::catalog::MapCatalog;
use mapinfo::ini::IniFile;
use mapinfo::parser::{parse_custom_map_ini, parse_registry_map, waypoint_to_pixel, RAW_MAP_SECTIONS};
use mapinfo::types::{MapRect, PreviewSize};
use mapinfo::{generate_spawn_ini, ParseOptions, SpawnParams};

fn game_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("game")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(game_dir().join(name)).unwrap()
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let registry_source = load_fixture("INI/MPMaps.ini");
    let custom_source = load_fixture("Maps/Custom/twin.map");
    let options = ParseOptions::new(game_dir());

    group.bench_function("ini_registry", |b| {
        b.iter(|| IniFile::parse(black_box(&registry_source)))
    });

    group.bench_function("registry_map", |b| {
        b.iter(|| {
            let mut ini = IniFile::parse(&registry_source);
            parse_registry_map(&mut ini, black_box("Maps\\Multiplayer\\outpost"), &options).unwrap()
        })
    });

    group.bench_function("custom_map", |b| {
        b.iter(|| {
            let ini = IniFile::parse_sections(black_box(&custom_source), RAW_MAP_SECTIONS);
            parse_custom_map_ini(&ini, "twin.map").unwrap()
        })
    });

    let size = MapRect::new(0, 0, 200, 100);
    let preview = PreviewSize::new(400, 200);
    group.bench_function("waypoint", |b| {
        b.iter(|| waypoint_to_pixel(black_box("123045"), &size, &size, &preview).unwrap())
    });

    group.finish();
}

// -- Catalog and spawn benchmarks --

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let options = ParseOptions::new(game_dir());

    group.bench_function("load_fixture_game", |b| {
        b.iter(|| {
            let mut catalog = MapCatalog::new();
            catalog
                .load_registry_file(&options.resolve("INI/MPMaps.ini"), &options)
                .unwrap();
            catalog.load_custom_maps(&options.resolve("Maps/Custom"));
            catalog
        })
    });

    let mut ini = IniFile::parse(&load_fixture("INI/MPMaps.ini"));
    let outpost = parse_registry_map(&mut ini, "Maps\\Multiplayer\\outpost", &options).unwrap();
    let params = SpawnParams::new(4, 0, 2);

    group.bench_function("spawn_coop", |b| {
        b.iter(|| generate_spawn_ini(black_box(&outpost), &params).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_catalog);
criterion_main!(benches);
