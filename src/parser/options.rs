//! Parse-time options.

use std::path::{Path, PathBuf};

/// Options passed into every map parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Game root directory; map files and previews resolve under it.
    pub game_path: PathBuf,

    /// Load preview images while parsing instead of on first use.
    pub preload_previews: bool,

    /// Fallback preview image, relative to `game_path`.
    pub placeholder_preview: PathBuf,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            game_path: PathBuf::from("."),
            preload_previews: false,
            placeholder_preview: PathBuf::from("Resources/nopreview.png"),
        }
    }
}

impl ParseOptions {
    /// Options rooted at a game directory, with default policies.
    pub fn new(game_path: impl Into<PathBuf>) -> Self {
        Self {
            game_path: game_path.into(),
            ..Self::default()
        }
    }

    /// Enable or disable preview preloading.
    pub fn with_preload_previews(mut self, preload: bool) -> Self {
        self.preload_previews = preload;
        self
    }

    /// Resolve a game-relative path written with either separator.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.game_path
            .join(game_relative_path(&relative.as_ref().to_string_lossy()))
    }
}

/// Convert a `\`-separated game path into a file system path.
pub fn game_relative_path(path: &str) -> PathBuf {
    PathBuf::from(path.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_relative_path() {
        assert_eq!(
            game_relative_path("Maps\\Multiplayer\\island"),
            PathBuf::from("Maps/Multiplayer/island")
        );
    }

    #[test]
    fn test_resolve() {
        let options = ParseOptions::new("/games/dta");
        assert_eq!(
            options.resolve(game_relative_path("Maps\\a.map")),
            PathBuf::from("/games/dta/Maps/a.map")
        );
    }

    #[test]
    fn test_resolve_backslash_path() {
        let options = ParseOptions::new("/games/dta");
        assert_eq!(
            options.resolve("Resources\\nopreview.png"),
            PathBuf::from("/games/dta/Resources/nopreview.png")
        );
        assert_eq!(
            options.resolve(Path::new("Resources/nopreview.png")),
            PathBuf::from("/games/dta/Resources/nopreview.png")
        );
    }
}
