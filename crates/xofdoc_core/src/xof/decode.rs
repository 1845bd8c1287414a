use std::path::Path;

use crate::xof::{Result, Scene, XofFile};

/// Decode all meshes from a binary `.x` file on disk.
///
/// Any failure aborts the whole decode; no partial scene is returned.
pub fn decode(path: impl AsRef<Path>) -> Result<Scene> {
	XofFile::open(path)?.scene()
}

/// Decode all meshes from an in-memory binary `.x` file.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<Scene> {
	XofFile::from_bytes(bytes)?.scene()
}
