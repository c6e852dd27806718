//! Map geometry: size rectangles, preview dimensions and pixel points.

use serde::Serialize;

use crate::error::Result;
use crate::parser::values::parse_tuple;

/// A 4-component map rectangle as written in `Size` and `LocalSize`
/// (`x,y,width,height`, in cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MapRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl MapRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parse a `x,y,width,height` comma string.
    pub fn parse(value: &str, field: &str) -> Result<Self> {
        let [x, y, width, height] = parse_tuple::<4>(value, field)?;
        Ok(Self::new(x, y, width, height))
    }
}

/// Pixel dimensions of a preview image (`PreviewSize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PreviewSize {
    pub width: i32,
    pub height: i32,
}

impl PreviewSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Parse a `width,height` comma string.
    pub fn parse(value: &str, field: &str) -> Result<Self> {
        let [width, height] = parse_tuple::<2>(value, field)?;
        Ok(Self::new(width, height))
    }
}

/// A player starting location in preview pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StartingLocation {
    pub x: i32,
    pub y: i32,
}

impl StartingLocation {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
