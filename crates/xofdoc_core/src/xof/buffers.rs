use crate::xof::Mesh;

/// Interleaved vertex layout consumed by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderVertex {
	/// Object-space position.
	pub position: [f32; 3],
	/// Texture coordinate, `[0.0, 0.0]` when the mesh has none for this vertex.
	pub uv: [f32; 2],
}

/// Flat vertex, index, and texture data for one mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
	/// One entry per mesh vertex.
	pub vertices: Vec<RenderVertex>,
	/// Three indices per face, in face order.
	pub indices: Vec<u32>,
	/// Texture filename bytes of the first material.
	pub texture: Option<Vec<u8>>,
}

impl MeshBuffers {
	/// Number of triangles described by `indices`.
	pub fn triangle_count(&self) -> usize {
		self.indices.len() / 3
	}
}

impl Mesh {
	/// Flatten this mesh into renderer-ready buffers.
	pub fn buffers(&self) -> MeshBuffers {
		let uvs = self.texture_coords.as_deref().unwrap_or(&[]);
		let vertices = self
			.vertices
			.iter()
			.enumerate()
			.map(|(idx, position)| RenderVertex {
				position: *position,
				uv: uvs.get(idx).copied().unwrap_or_default(),
			})
			.collect();

		MeshBuffers {
			vertices,
			indices: self.triangle_indices(),
			texture: self.texture_filename().map(<[u8]>::to_vec),
		}
	}
}
