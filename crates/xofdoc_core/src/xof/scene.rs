/// Fully decoded scene: every top-level `Mesh` record in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
	/// Decoded meshes.
	pub meshes: Vec<Mesh>,
}

impl Scene {
	/// Find a mesh by its instance name.
	pub fn mesh_by_name(&self, name: &str) -> Option<&Mesh> {
		self.meshes.iter().find(|mesh| mesh.name == name)
	}
}

/// One triangle of vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face(pub [u32; 3]);

impl Face {
	/// Vertex indices in winding order.
	pub fn indices(&self) -> [u32; 3] {
		self.0
	}
}

/// Triangulated mesh with optional normals, texture coordinates, and materials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
	/// Instance name, empty when the record had none.
	pub name: String,
	/// Vertex positions.
	pub vertices: Vec<[f32; 3]>,
	/// Triangles indexing into `vertices`.
	pub faces: Vec<Face>,
	/// Normals from a nested `MeshNormals` record.
	pub normals: Option<MeshNormals>,
	/// Per-vertex UV pairs from a nested `MeshTextureCoords` record.
	pub texture_coords: Option<Vec<[f32; 2]>>,
	/// Materials from a nested `MeshMaterialList` record.
	pub material_list: Option<MeshMaterialList>,
}

impl Mesh {
	/// Positions flattened to `x, y, z` triples.
	pub fn flat_positions(&self) -> Vec<f32> {
		self.vertices.iter().flatten().copied().collect()
	}

	/// Triangle indices flattened in face order.
	pub fn triangle_indices(&self) -> Vec<u32> {
		self.faces.iter().flat_map(Face::indices).collect()
	}

	/// Texture filename bytes of the first material, if it names one.
	pub fn texture_filename(&self) -> Option<&[u8]> {
		self.material_list
			.as_ref()
			.and_then(|list| list.materials.first())
			.and_then(|material| material.texture_filename.as_deref())
	}
}

/// Normal vectors and the triangles that index them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshNormals {
	/// Normal vectors.
	pub normals: Vec<[f32; 3]>,
	/// One normal-index triangle per mesh face.
	pub face_normals: Vec<Face>,
}

/// Per-face material assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshMaterialList {
	/// Material index for each face, in face order.
	pub face_indices: Vec<u32>,
	/// Materials in declaration order.
	pub materials: Vec<Material>,
}

/// RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorRgba {
	/// Red channel.
	pub red: f32,
	/// Green channel.
	pub green: f32,
	/// Blue channel.
	pub blue: f32,
	/// Alpha channel.
	pub alpha: f32,
}

/// RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorRgb {
	/// Red channel.
	pub red: f32,
	/// Green channel.
	pub green: f32,
	/// Blue channel.
	pub blue: f32,
}

/// Surface material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
	/// Diffuse face color.
	pub face_color: ColorRgba,
	/// Specular exponent.
	pub specular_power: f32,
	/// Specular color.
	pub specular_color: ColorRgb,
	/// Emissive color.
	pub emissive_color: ColorRgb,
	/// Filename from a nested `TextureFilename` record, in the file's byte encoding.
	pub texture_filename: Option<Vec<u8>>,
}
