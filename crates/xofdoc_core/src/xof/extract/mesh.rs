use log::{debug, warn};

use super::{expect_name, face_table, floats, integers, nested, single_integer, vec3_list};
use crate::xof::{Mesh, Record, Result, XofError, extract_mesh_material_list, extract_mesh_normals, extract_mesh_texture_coords};

const KIND: &str = "Mesh";

type ChildExtractor = fn(&Record, &mut Mesh) -> Result<()>;

/// Nested record kinds a mesh understands, keyed by record name.
static CHILDREN: [(&str, ChildExtractor); 3] = [
	("MeshNormals", attach_normals),
	("MeshTextureCoords", attach_texture_coords),
	("MeshMaterialList", attach_material_list),
];

/// Names of nested records that [`extract_mesh`] decodes. Others are ignored.
pub fn mesh_child_names() -> impl Iterator<Item = &'static str> {
	CHILDREN.iter().map(|(name, _)| *name)
}

fn child_extractor(name: &str) -> Option<ChildExtractor> {
	CHILDREN.iter().find(|(child, _)| *child == name).map(|(_, extract)| *extract)
}

/// Extract a `Mesh` record.
///
/// Fields: vertex count, `3 * count` positions, face table, then nested records
/// dispatched by name.
pub fn extract_mesh(record: &Record) -> Result<Mesh> {
	expect_name(record, KIND)?;

	let vertex_count = single_integer(record, KIND, 0)? as usize;
	let positions = floats(record, KIND, 1, vertex_count.saturating_mul(3))?;
	let faces = face_table(integers(record, KIND, 2)?, KIND)?;

	let mut mesh = Mesh {
		name: record.optional_name.clone(),
		vertices: vec3_list(positions),
		faces,
		..Mesh::default()
	};

	for idx in 3..record.fields.len() {
		let child = nested(record, KIND, idx)?;
		match child_extractor(&child.name) {
			Some(extract) => extract(child, &mut mesh)?,
			None => debug!("mesh {:?}: ignoring nested {:?}", mesh.name, child.name),
		}
	}

	if let Some(list) = &mesh.material_list
		&& list.face_indices.len() != mesh.faces.len()
	{
		return Err(XofError::schema(
			"MeshMaterialList",
			format!("{} face indices for {} faces", list.face_indices.len(), mesh.faces.len()),
		));
	}

	Ok(mesh)
}

fn attach_normals(record: &Record, mesh: &mut Mesh) -> Result<()> {
	mesh.normals = Some(extract_mesh_normals(record)?);
	Ok(())
}

fn attach_texture_coords(record: &Record, mesh: &mut Mesh) -> Result<()> {
	let coords = extract_mesh_texture_coords(record)?;
	if coords.len() != mesh.vertices.len() {
		warn!("mesh {:?}: {} texture coords for {} vertices", mesh.name, coords.len(), mesh.vertices.len());
	}
	mesh.texture_coords = Some(coords);
	Ok(())
}

fn attach_material_list(record: &Record, mesh: &mut Mesh) -> Result<()> {
	mesh.material_list = Some(extract_mesh_material_list(record)?);
	Ok(())
}
