use super::{expect_name, integers, nested};
use crate::xof::{MeshMaterialList, Record, Result, XofError, extract_material};

const KIND: &str = "MeshMaterialList";

/// Extract a `MeshMaterialList` record.
///
/// Field 0 is `[material_count, face_index_count, face_index...]`; every later
/// field must be a `Material` record.
pub fn extract_mesh_material_list(record: &Record) -> Result<MeshMaterialList> {
	expect_name(record, KIND)?;

	let header = integers(record, KIND, 0)?;
	let [_material_count, face_index_count, face_indices @ ..] = header else {
		return Err(XofError::schema(KIND, format!("field 0 holds {} integers, expected at least 2", header.len())));
	};
	if face_indices.len() != *face_index_count as usize {
		return Err(XofError::schema(
			KIND,
			format!("declares {face_index_count} face indices but lists {}", face_indices.len()),
		));
	}

	let materials = (1..record.fields.len())
		.map(|idx| nested(record, KIND, idx).and_then(extract_material))
		.collect::<Result<Vec<_>>>()?;

	Ok(MeshMaterialList {
		face_indices: face_indices.to_vec(),
		materials,
	})
}
