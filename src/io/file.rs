//! Whole-map save and load through buffered files

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::io::error::{MapError, Result};
use crate::io::stream::Serializable;
use crate::spatial::Tilemap;

/// Write a map to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns [`MapError::FileSystem`] when the file cannot be created or
/// flushed, or [`MapError::Stream`] when a write fails
pub fn save_tilemap(path: impl AsRef<Path>, map: &Tilemap) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| MapError::FileSystem {
        path: path.to_path_buf(),
        operation: "create",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    map.serialize(&mut writer)?;
    writer.flush().map_err(|e| MapError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush",
        source: e,
    })?;

    debug!(path = %path.display(), size = map.size(), "tilemap saved");
    Ok(())
}

/// Read a map previously written by [`save_tilemap`]
///
/// # Errors
///
/// Returns [`MapError::FileSystem`] when the file cannot be opened, or the
/// error of [`Tilemap::unserialize`] when the content is truncated or invalid
pub fn load_tilemap(path: impl AsRef<Path>) -> Result<Tilemap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MapError::FileSystem {
        path: path.to_path_buf(),
        operation: "open",
        source: e,
    })?;

    let mut reader = BufReader::new(file);
    let mut map = Tilemap::new();
    if let Err(error) = map.unserialize(&mut reader) {
        warn!(path = %path.display(), %error, "tilemap load rejected");
        return Err(error);
    }

    debug!(path = %path.display(), size = map.size(), "tilemap loaded");
    Ok(map)
}
