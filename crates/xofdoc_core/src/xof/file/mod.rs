use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::xof::{Mesh, Record, RecordParser, Result, Scene, TokenReader, XofError, XofHeader, extract_mesh};

/// Opened `.x` file with buffered bytes and a validated header.
pub struct XofFile {
	/// Parsed file header.
	pub header: XofHeader,
	bytes: Vec<u8>,
}

impl XofFile {
	/// Read a file from disk and validate its header.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::from_bytes(bytes)
	}

	/// Validate the header of an in-memory file.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = XofHeader::parse(&bytes)?;
		Ok(Self { header, bytes })
	}

	/// Return raw bytes backing this file.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate top-level records in file order.
	pub fn records(&self) -> RecordIter<'_> {
		match RecordParser::new(TokenReader::new(&self.bytes, self.header)) {
			Ok(parser) => RecordIter {
				parser: Some(parser),
				pending: None,
			},
			Err(err) => RecordIter {
				parser: None,
				pending: Some(err),
			},
		}
	}

	/// Decode every top-level `Mesh` record into a scene.
	///
	/// Other top-level records are parsed for well-formedness and skipped.
	pub fn scene(&self) -> Result<Scene> {
		let mut meshes = Vec::new();
		for record in self.records() {
			let record = record?;
			if record.name != "Mesh" {
				debug!("skipping top-level {:?} {:?}", record.name, record.optional_name);
				continue;
			}
			let mesh = extract_mesh(&record)?;
			log_mesh(&mesh);
			meshes.push(mesh);
		}
		Ok(Scene { meshes })
	}

	/// Scan record counts and nesting across the whole file.
	pub fn scan_record_stats(&self) -> Result<RecordStats> {
		let mut stats = RecordStats {
			top_level_count: 0,
			record_count: 0,
			mesh_count: 0,
			max_depth: 0,
			names: HashMap::new(),
		};

		for record in self.records() {
			let record = record?;
			stats.top_level_count += 1;
			if record.name == "Mesh" {
				stats.mesh_count += 1;
			}
			record.visit(&mut |item, depth| {
				stats.record_count += 1;
				stats.max_depth = stats.max_depth.max(depth + 1);
				*stats.names.entry(item.name.clone()).or_insert(0) += 1;
			});
		}

		Ok(stats)
	}
}

fn log_mesh(mesh: &Mesh) {
	debug!(
		"decoded mesh {:?}: {} vertices, {} faces, normals={}, uvs={}, materials={}",
		mesh.name,
		mesh.vertices.len(),
		mesh.faces.len(),
		mesh.normals.is_some(),
		mesh.texture_coords.as_ref().map_or(0, Vec::len),
		mesh.material_list.as_ref().map_or(0, |list| list.materials.len()),
	);
}

/// Iterator over top-level records. Stops after the first error.
pub struct RecordIter<'a> {
	parser: Option<RecordParser<'a>>,
	pending: Option<XofError>,
}

impl Iterator for RecordIter<'_> {
	type Item = Result<Record>;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(err) = self.pending.take() {
			return Some(Err(err));
		}

		let parser = self.parser.as_mut()?;
		match parser.next_record() {
			Ok(Some(record)) => Some(Ok(record)),
			Ok(None) => {
				self.parser = None;
				None
			}
			Err(err) => {
				self.parser = None;
				Some(Err(err))
			}
		}
	}
}

/// Record distribution statistics for one file.
pub struct RecordStats {
	/// Number of top-level records.
	pub top_level_count: u32,
	/// Number of records at every depth.
	pub record_count: u32,
	/// Number of top-level `Mesh` records.
	pub mesh_count: u32,
	/// Deepest nesting level, 1 for a flat file.
	pub max_depth: usize,
	/// Record count per record name.
	pub names: HashMap<String, u32>,
}

#[cfg(test)]
mod tests;
