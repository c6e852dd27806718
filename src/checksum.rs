//! Map file checksums.
//!
//! Lobbies compare the SHA-1 of the map file to make sure every player runs
//! the same map, so the digest is computed over the raw file bytes.

use std::fs::File;
use std::io;
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::error::{MapError, Result};

/// Compute the SHA-1 of a file as uppercase hex.
pub fn file_sha1(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open map file for checksum: {}", e),
    })?;

    let mut hasher = Sha1::new();
    io::copy(&mut file, &mut hasher).map_err(|e| MapError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read map file: {}", e),
    })?;

    Ok(format!("{:X}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_sha1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.map");
        std::fs::write(&path, "abc").unwrap();

        assert_eq!(
            file_sha1(&path).unwrap(),
            "A9993E364706816ABA3E25717850C26C9CD0D89D"
        );
    }

    #[test]
    fn test_file_sha1_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.map");
        std::fs::write(&path, "").unwrap();

        assert_eq!(
            file_sha1(&path).unwrap(),
            "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"
        );
    }

    #[test]
    fn test_file_sha1_large_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("large.map");
        std::fs::write(&path, vec![b'a'; 1_000_000]).unwrap();

        assert_eq!(
            file_sha1(&path).unwrap(),
            "34AA973CD4C4DAA4F61EEB2BDBAD27316534016F"
        );
    }

    #[test]
    fn test_file_sha1_missing() {
        let result = file_sha1(Path::new("/nonexistent/missing.map"));
        assert!(matches!(result, Err(MapError::Io { .. })));
    }
}
