mod buffers;
mod bytes;
mod decode;
mod error;
mod extract;
mod file;
mod header;
mod parse;
mod record;
mod scene;
mod token;

/// Flattened renderer buffers.
pub use buffers::{MeshBuffers, RenderVertex};
/// Whole-file decode entry points.
pub use decode::{decode, decode_bytes};
/// Error and result aliases.
pub use error::{Result, XofError};
/// Per-record-kind semantic extractors.
pub use extract::{
	extract_material, extract_mesh, extract_mesh_material_list, extract_mesh_normals, extract_mesh_texture_coords, extract_texture_filename, mesh_child_names,
};
/// File abstraction, record iteration, and statistics.
pub use file::{RecordIter, RecordStats, XofFile};
/// File header representation.
pub use header::{FloatWidth, Format, XofHeader};
/// Record tree builder.
pub use parse::RecordParser;
/// Generic record tree types.
pub use record::{Field, FloatList, Record};
/// Decoded scene types.
pub use scene::{ColorRgb, ColorRgba, Face, Material, Mesh, MeshMaterialList, MeshNormals, Scene};
/// Token classification and stream reader.
pub use token::{Token, TokenReader};
