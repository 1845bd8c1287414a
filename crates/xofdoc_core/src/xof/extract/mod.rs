//! Schema-checked conversion from generic records to scene types.
//!
//! Every extractor is a pure function over a borrowed [`Record`]. Field order and
//! count are part of each schema, and the first violation is returned as an error.

mod material;
mod material_list;
mod mesh;
mod normals;
mod texture_coords;
mod texture_filename;

use log::warn;

use crate::xof::{Face, Field, FloatList, Record, Result, XofError};

pub use material::extract_material;
pub use material_list::extract_mesh_material_list;
pub use mesh::{extract_mesh, mesh_child_names};
pub use normals::extract_mesh_normals;
pub use texture_coords::extract_mesh_texture_coords;
pub use texture_filename::extract_texture_filename;

fn expect_name(record: &Record, kind: &'static str) -> Result<()> {
	if record.name == kind {
		return Ok(());
	}
	Err(XofError::schema(kind, format!("record is named {:?}", record.name)))
}

fn field<'r>(record: &'r Record, kind: &'static str, idx: usize) -> Result<&'r Field> {
	record
		.fields
		.get(idx)
		.ok_or_else(|| XofError::schema(kind, format!("missing field {idx} (record has {})", record.fields.len())))
}

fn integers<'r>(record: &'r Record, kind: &'static str, idx: usize) -> Result<&'r [u32]> {
	match field(record, kind, idx)? {
		Field::Integers(values) => Ok(values),
		other => Err(wrong_kind(kind, idx, "integer list", other)),
	}
}

fn single_integer(record: &Record, kind: &'static str, idx: usize) -> Result<u32> {
	match integers(record, kind, idx)? {
		[value] => Ok(*value),
		values => Err(XofError::schema(kind, format!("field {idx} holds {} integers, expected 1", values.len()))),
	}
}

fn floats<'r>(record: &'r Record, kind: &'static str, idx: usize, expected_len: usize) -> Result<&'r FloatList> {
	match field(record, kind, idx)? {
		Field::Floats(values) if values.len() == expected_len => Ok(values),
		Field::Floats(values) => Err(XofError::schema(
			kind,
			format!("field {idx} holds {} floats, expected {expected_len}", values.len()),
		)),
		other => Err(wrong_kind(kind, idx, "float list", other)),
	}
}

fn nested<'r>(record: &'r Record, kind: &'static str, idx: usize) -> Result<&'r Record> {
	match field(record, kind, idx)? {
		Field::Record(child) => Ok(child),
		other => Err(wrong_kind(kind, idx, "record", other)),
	}
}

fn wrong_kind(kind: &'static str, idx: usize, expected: &str, got: &Field) -> XofError {
	XofError::schema(kind, format!("field {idx} holds {}, expected {expected}", got.kind()))
}

fn expect_field_count(record: &Record, kind: &'static str, max: usize) -> Result<()> {
	if record.fields.len() > max {
		return Err(XofError::schema(
			kind,
			format!("record has {} fields, expected at most {max}", record.fields.len()),
		));
	}
	Ok(())
}

fn vec3_list(values: &FloatList) -> Vec<[f32; 3]> {
	values.to_f32_vec().chunks_exact(3).map(|item| [item[0], item[1], item[2]]).collect()
}

/// Parse a `[face_count, (3, i0, i1, i2)*]` table.
///
/// The leading face count is informational. Any group whose index count is not
/// three fails the whole table.
fn face_table(values: &[u32], kind: &'static str) -> Result<Vec<Face>> {
	let Some((&declared, mut rest)) = values.split_first() else {
		return Err(XofError::schema(kind, "face table is empty"));
	};

	let mut faces = Vec::with_capacity((declared as usize).min(rest.len() / 4));
	while let Some((&count, tail)) = rest.split_first() {
		if count != 3 {
			return Err(XofError::NonTriangularFace {
				record: kind,
				face: faces.len(),
				count,
			});
		}
		let &[a, b, c, ..] = tail else {
			return Err(XofError::schema(kind, format!("face {} is truncated", faces.len())));
		};
		faces.push(Face([a, b, c]));
		rest = &tail[3..];
	}

	if faces.len() != declared as usize {
		warn!("{kind} declares {declared} faces but lists {}", faces.len());
	}
	Ok(faces)
}
