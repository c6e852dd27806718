//! Waypoint to preview-pixel coordinate transform.
//!
//! Waypoints are stored as a single digit string `RRRCCC` (or `RRCCC`)
//! holding the row and column of an isometric cell. The transform turns that
//! into a pixel position on the map's preview image.

use crate::error::{MapError, Result};
use crate::types::{MapRect, PreviewSize, StartingLocation};

/// Width of one cell in pixels.
pub const TILE_WIDTH: i64 = 48;

/// Height of one cell in pixels.
pub const TILE_HEIGHT: i64 = 24;

/// Split a waypoint token into `(row, column)`.
///
/// Five-digit tokens hold a two-digit row; every other length holds a
/// three-digit row. The column is whatever follows.
pub fn split_waypoint(token: &str) -> Result<(i32, i32)> {
    let token = token.trim();

    if token.len() < 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MapError::Parse {
            message: format!("Invalid waypoint '{}'", token),
            help: Some("Waypoints are 4 to 6 digits: row followed by column".to_string()),
        });
    }

    let row_len = if token.len() == 5 { 2 } else { 3 };
    let (row, col) = token.split_at(row_len);

    let parse = |digits: &str| {
        digits
            .parse::<i32>()
            .map_err(|_| MapError::parse(format!("Waypoint '{}' is out of range", token)))
    };

    Ok((parse(row)?, parse(col)?))
}

/// Convert a waypoint token into a pixel position on the preview image.
///
/// `actual` is the map's `Size` and `local` its `LocalSize`. The width of
/// `actual` offsets both isometric axes; this matches how the game encodes
/// cell numbers and must stay that way.
pub fn waypoint_to_pixel(
    token: &str,
    actual: &MapRect,
    local: &MapRect,
    preview: &PreviewSize,
) -> Result<StartingLocation> {
    let (row, col) = split_waypoint(token)?;
    let (row, col) = (i64::from(row), i64::from(col));
    let actual_width = i64::from(actual.width);

    let iso_tile_x = col - row + actual_width - 1;
    let iso_tile_y = col + row - actual_width - 1;

    let pixel_x = iso_tile_x * TILE_WIDTH / 2 - i64::from(local.x) * TILE_WIDTH;
    let pixel_y = iso_tile_y * TILE_HEIGHT / 2 - i64::from(local.y) * TILE_HEIGHT;

    let extent_x = i64::from(local.width) * TILE_WIDTH;
    let extent_y = i64::from(local.height) * TILE_HEIGHT;

    if extent_x == 0 || extent_y == 0 {
        return Err(MapError::Geometry {
            message: format!(
                "Cannot place waypoint '{}': local map size {}x{} has no area",
                token.trim(),
                local.width,
                local.height
            ),
        });
    }

    let x = scale(pixel_x, extent_x, preview.width);
    let y = scale(pixel_y, extent_y, preview.height);

    Ok(StartingLocation::new(x, y))
}

/// Scale `position / extent` onto `target` pixels, truncating toward zero.
fn scale(position: i64, extent: i64, target: i32) -> i32 {
    // Multiply before dividing so exact ratios stay exact in f64.
    let scaled = (position as f64 * f64::from(target)) / extent as f64;
    scaled as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_five_digits() {
        assert_eq!(split_waypoint("12034").unwrap(), (12, 34));
    }

    #[test]
    fn test_split_six_digits() {
        assert_eq!(split_waypoint("123045").unwrap(), (123, 45));
    }

    #[test]
    fn test_split_four_digits() {
        assert_eq!(split_waypoint("1234").unwrap(), (123, 4));
    }

    #[test]
    fn test_split_rejects_garbage() {
        assert!(split_waypoint("12a34").is_err());
        assert!(split_waypoint("123").is_err());
        assert!(split_waypoint("").is_err());
    }

    #[test]
    fn test_waypoint_to_pixel() {
        let actual = MapRect::new(0, 0, 50, 50);
        let local = MapRect::new(2, 4, 46, 40);
        let preview = PreviewSize::new(460, 400);

        let point = waypoint_to_pixel("60050", &actual, &local, &preview).unwrap();
        assert_eq!(point, StartingLocation::new(175, 255));
    }

    #[test]
    fn test_waypoint_to_pixel_six_digits() {
        let actual = MapRect::new(0, 0, 200, 100);
        let local = MapRect::new(0, 0, 200, 100);
        let preview = PreviewSize::new(400, 200);

        let point = waypoint_to_pixel("123045", &actual, &local, &preview).unwrap();
        assert_eq!(point, StartingLocation::new(121, -33));
    }

    #[test]
    fn test_waypoint_to_pixel_is_deterministic() {
        let actual = MapRect::new(0, 0, 50, 50);
        let local = MapRect::new(2, 4, 46, 40);
        let preview = PreviewSize::new(460, 400);

        let first = waypoint_to_pixel("45070", &actual, &local, &preview).unwrap();
        let second = waypoint_to_pixel("45070", &actual, &local, &preview).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_waypoint_to_pixel_zero_extent() {
        let actual = MapRect::default();
        let local = MapRect::default();
        let preview = PreviewSize::default();

        let err = waypoint_to_pixel("60050", &actual, &local, &preview).unwrap_err();
        assert!(matches!(err, MapError::Geometry { .. }));
    }
}
