use std::path::PathBuf;

use xofdoc::xof::{Material, Mesh, Result};

use crate::cmd::util::{display_text, emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Decode all meshes and print a per-mesh summary.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let scene = open_file(&path)?.scene()?;

	if json {
		let payload = SceneJson {
			path: path.display().to_string(),
			meshes: scene.meshes.iter().map(mesh_json).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("mesh_count: {}", scene.meshes.len());
	for (idx, mesh) in scene.meshes.iter().enumerate() {
		println!("mesh[{idx}]: {:?}", mesh.name);
		println!("  vertices: {}", mesh.vertices.len());
		println!("  faces: {}", mesh.faces.len());
		match &mesh.normals {
			Some(normals) => println!("  normals: {} ({} face normals)", normals.normals.len(), normals.face_normals.len()),
			None => println!("  normals: -"),
		}
		match &mesh.texture_coords {
			Some(coords) => println!("  texture_coords: {}", coords.len()),
			None => println!("  texture_coords: -"),
		}
		let materials = mesh.material_list.as_ref().map(|list| list.materials.as_slice()).unwrap_or(&[]);
		println!("  materials: {}", materials.len());
		for (slot, material) in materials.iter().enumerate() {
			let color = material.face_color;
			println!(
				"    [{slot}] face=({}, {}, {}, {}) power={} texture={}",
				color.red,
				color.green,
				color.blue,
				color.alpha,
				material.specular_power,
				material.texture_filename.as_deref().map_or_else(|| "-".to_owned(), display_text)
			);
		}
	}

	Ok(())
}

fn mesh_json(mesh: &Mesh) -> MeshJson {
	MeshJson {
		name: mesh.name.clone(),
		vertex_count: mesh.vertices.len(),
		face_count: mesh.faces.len(),
		normal_count: mesh.normals.as_ref().map(|normals| normals.normals.len()),
		texture_coord_count: mesh.texture_coords.as_ref().map(Vec::len),
		face_material_indices: mesh.material_list.as_ref().map(|list| list.face_indices.clone()),
		materials: mesh
			.material_list
			.as_ref()
			.map(|list| list.materials.iter().map(material_json).collect())
			.unwrap_or_default(),
	}
}

fn material_json(material: &Material) -> MaterialJson {
	let face = material.face_color;
	let specular = material.specular_color;
	let emissive = material.emissive_color;
	MaterialJson {
		face_color: [face.red, face.green, face.blue, face.alpha],
		specular_power: material.specular_power,
		specular_color: [specular.red, specular.green, specular.blue],
		emissive_color: [emissive.red, emissive.green, emissive.blue],
		texture_filename: material.texture_filename.as_deref().map(display_text),
	}
}

#[derive(serde::Serialize)]
struct MaterialJson {
	face_color: [f32; 4],
	specular_power: f32,
	specular_color: [f32; 3],
	emissive_color: [f32; 3],
	texture_filename: Option<String>,
}

#[derive(serde::Serialize)]
struct MeshJson {
	name: String,
	vertex_count: usize,
	face_count: usize,
	normal_count: Option<usize>,
	texture_coord_count: Option<usize>,
	face_material_indices: Option<Vec<u32>>,
	materials: Vec<MaterialJson>,
}

#[derive(serde::Serialize)]
struct SceneJson {
	path: String,
	meshes: Vec<MeshJson>,
}

#[cfg(test)]
mod tests;
