use super::{expect_name, face_table, floats, integers, single_integer, vec3_list};
use crate::xof::{MeshNormals, Record, Result};

const KIND: &str = "MeshNormals";

/// Extract a `MeshNormals` record: normal count, `3 * count` floats, face-normal table.
pub fn extract_mesh_normals(record: &Record) -> Result<MeshNormals> {
	expect_name(record, KIND)?;

	let normal_count = single_integer(record, KIND, 0)? as usize;
	let normals = floats(record, KIND, 1, normal_count.saturating_mul(3))?;
	let face_normals = face_table(integers(record, KIND, 2)?, KIND)?;

	Ok(MeshNormals {
		normals: vec3_list(normals),
		face_normals,
	})
}
