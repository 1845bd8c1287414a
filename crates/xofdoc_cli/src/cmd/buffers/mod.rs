use std::path::PathBuf;

use xofdoc::xof::{Mesh, MeshBuffers, Result, XofError};

use crate::cmd::util::{display_text, emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Only dump the mesh with this name.
	#[arg(long)]
	pub mesh: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Dump interleaved vertices, triangle indices, and texture per mesh.
pub fn run(args: Args) -> Result<()> {
	let Args { path, mesh, json } = args;

	let scene = open_file(&path)?.scene()?;
	let selected: Vec<&Mesh> = match &mesh {
		Some(name) => vec![scene.mesh_by_name(name).ok_or_else(|| XofError::MeshNotFound { name: name.clone() })?],
		None => scene.meshes.iter().collect(),
	};

	if json {
		let payload = BuffersJson {
			path: path.display().to_string(),
			meshes: selected.iter().map(|item| buffers_json(&item.name, &item.buffers())).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	for item in selected {
		let buffers = item.buffers();
		println!("mesh: {:?}", item.name);
		println!("texture: {}", buffers.texture.as_deref().map_or_else(|| "-".to_owned(), display_text));
		for vertex in &buffers.vertices {
			let [x, y, z] = vertex.position;
			let [u, v] = vertex.uv;
			println!("v {x} {y} {z} uv {u} {v}");
		}
		for tri in buffers.indices.chunks_exact(3) {
			println!("tri {} {} {}", tri[0], tri[1], tri[2]);
		}
	}

	Ok(())
}

fn buffers_json(name: &str, buffers: &MeshBuffers) -> MeshBuffersJson {
	MeshBuffersJson {
		name: name.to_owned(),
		texture: buffers.texture.as_deref().map(display_text),
		triangle_count: buffers.triangle_count(),
		vertices: buffers
			.vertices
			.iter()
			.map(|vertex| VertexJson {
				position: vertex.position,
				uv: vertex.uv,
			})
			.collect(),
		indices: buffers.indices.clone(),
	}
}

#[derive(serde::Serialize)]
struct VertexJson {
	position: [f32; 3],
	uv: [f32; 2],
}

#[derive(serde::Serialize)]
struct MeshBuffersJson {
	name: String,
	texture: Option<String>,
	triangle_count: usize,
	vertices: Vec<VertexJson>,
	indices: Vec<u32>,
}

#[derive(serde::Serialize)]
struct BuffersJson {
	path: String,
	meshes: Vec<MeshBuffersJson>,
}

#[cfg(test)]
mod tests;
