use super::{expect_name, floats, single_integer};
use crate::xof::{Record, Result};

const KIND: &str = "MeshTextureCoords";

/// Extract a `MeshTextureCoords` record into packed UV pairs.
pub fn extract_mesh_texture_coords(record: &Record) -> Result<Vec<[f32; 2]>> {
	expect_name(record, KIND)?;

	let count = single_integer(record, KIND, 0)? as usize;
	let values = floats(record, KIND, 1, count.saturating_mul(2))?;

	Ok(values.to_f32_vec().chunks_exact(2).map(|uv| [uv[0], uv[1]]).collect())
}
