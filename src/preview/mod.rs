//! Map preview images.
//!
//! Previews are loaded on demand (or eagerly while parsing, when
//! [`ParseOptions::preload_previews`] is set). Loading never fails: a missing
//! or unreadable preview falls back to the placeholder image, and a missing
//! placeholder falls back to a blank image.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use log::warn;

use crate::error::{MapError, Result};
use crate::parser::ParseOptions;
use crate::types::{MapDescriptor, StartingLocation};

/// Side length of a starting location marker in pixels.
pub const MARKER_SIZE: u32 = 5;

/// Marker colour per player slot.
const SLOT_COLOURS: [[u8; 4]; 8] = [
    [255, 0, 0, 255],
    [0, 0, 255, 255],
    [0, 200, 0, 255],
    [255, 200, 0, 255],
    [255, 128, 0, 255],
    [160, 0, 200, 255],
    [0, 200, 200, 255],
    [255, 105, 180, 255],
];

impl MapDescriptor {
    /// Load the preview image and attach it to this descriptor.
    pub fn load_preview(&mut self, options: &ParseOptions) {
        self.preview = Some(load_preview_image(self, options));
    }
}

/// Load the preview image for `map`, falling back to the placeholder.
pub fn load_preview_image(map: &MapDescriptor, options: &ParseOptions) -> RgbaImage {
    if map.extract_custom_preview() {
        if let Some(relative) = map.preview_path() {
            let path = options.resolve(relative);
            if path.exists() {
                match image::open(&path) {
                    Ok(img) => return img.to_rgba8(),
                    Err(e) => warn!("Failed to load preview {}: {}", path.display(), e),
                }
            }
        }
    }

    load_placeholder(options)
}

fn load_placeholder(options: &ParseOptions) -> RgbaImage {
    let path = options.resolve(&options.placeholder_preview);
    match image::open(&path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            warn!("Failed to load placeholder preview {}: {}", path.display(), e);
            ImageBuffer::new(1, 1)
        }
    }
}

/// Draw a square marker at each starting location.
///
/// Markers are centred on their location and clipped to the image.
pub fn render_start_markers(preview: &RgbaImage, locations: &[StartingLocation]) -> RgbaImage {
    let mut img = preview.clone();
    let half = (MARKER_SIZE / 2) as i64;

    for (slot, location) in locations.iter().enumerate() {
        let colour = Rgba(SLOT_COLOURS[slot % SLOT_COLOURS.len()]);

        for dy in -half..=half {
            for dx in -half..=half {
                let x = i64::from(location.x) + dx;
                let y = i64::from(location.y) + dy;

                if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
                    continue;
                }
                img.put_pixel(x as u32, y as u32, colour);
            }
        }
    }

    img
}

/// Write a preview image to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MapSource;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, Rgba(rgba))
    }

    fn map_with_preview(path: &str) -> MapDescriptor {
        let mut map = MapDescriptor::new("Maps\\a", MapSource::Registry);
        map.preview_path = Some(PathBuf::from(path));
        map
    }

    #[test]
    fn test_load_preview_from_disk() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Maps")).unwrap();
        solid(4, 3, [10, 20, 30, 255])
            .save(dir.path().join("Maps/a.png"))
            .unwrap();

        let mut map = map_with_preview("Maps/a.png");
        map.load_preview(&ParseOptions::new(dir.path()));

        let preview = map.preview().unwrap();
        assert_eq!(preview.dimensions(), (4, 3));
        assert_eq!(preview.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_load_preview_falls_back_to_placeholder() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Resources")).unwrap();
        solid(2, 2, [255, 0, 255, 255])
            .save(dir.path().join("Resources/nopreview.png"))
            .unwrap();

        let map = map_with_preview("Maps/missing.png");
        let preview = load_preview_image(&map, &ParseOptions::new(dir.path()));

        assert_eq!(preview.dimensions(), (2, 2));
        assert_eq!(preview.get_pixel(1, 1).0, [255, 0, 255, 255]);
    }

    #[test]
    fn test_load_preview_without_any_image() {
        let dir = tempdir().unwrap();
        let map = map_with_preview("Maps/missing.png");

        let preview = load_preview_image(&map, &ParseOptions::new(dir.path()));

        assert_eq!(preview.dimensions(), (1, 1));
        assert_eq!(preview.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_extraction_disabled_uses_placeholder() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Maps")).unwrap();
        solid(4, 4, [1, 2, 3, 255])
            .save(dir.path().join("Maps/a.png"))
            .unwrap();

        let mut map = map_with_preview("Maps/a.png");
        map.set_extract_custom_preview(false);

        let preview = load_preview_image(&map, &ParseOptions::new(dir.path()));
        assert_eq!(preview.dimensions(), (1, 1));
    }

    #[test]
    fn test_render_start_markers() {
        let base = solid(20, 20, [0, 0, 0, 255]);
        let locations = [StartingLocation::new(10, 10), StartingLocation::new(0, 19)];

        let img = render_start_markers(&base, &locations);

        assert_eq!(img.get_pixel(10, 10).0, SLOT_COLOURS[0]);
        assert_eq!(img.get_pixel(12, 8).0, SLOT_COLOURS[0]);
        assert_eq!(img.get_pixel(13, 10).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 19).0, SLOT_COLOURS[1]);
        assert_eq!(img.get_pixel(2, 17).0, SLOT_COLOURS[1]);
        // Source image is untouched.
        assert_eq!(base.get_pixel(10, 10).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_render_markers_outside_image() {
        let base = solid(4, 4, [0, 0, 0, 255]);
        let img = render_start_markers(&base, &[StartingLocation::new(-50, 100)]);

        assert_eq!(img, base);
    }

    #[test]
    fn test_write_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.png");

        write_png(&solid(3, 2, [9, 9, 9, 255]), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 2));
    }

    #[test]
    fn test_write_png_bad_path() {
        let result = write_png(&solid(1, 1, [0, 0, 0, 255]), Path::new("/nonexistent/dir/x.png"));
        assert!(matches!(result, Err(MapError::Io { .. })));
    }
}
