use xofdoc_testkit::{StreamBuilder, fixture_path, plane_stream, write_temp};

use crate::xof::{Face, FloatWidth, RenderVertex, XofError, XofFile, decode, decode_bytes};

#[test]
fn minimal_plane_decodes_one_triangle() {
	let scene = decode_bytes(plane_stream(3)).expect("plane decodes");
	assert_eq!(scene.meshes.len(), 1);
	let mesh = &scene.meshes[0];
	assert_eq!(mesh.name, "Plane");
	assert_eq!(mesh.vertices.len(), 4);
	assert_eq!(mesh.faces, vec![Face([0, 1, 2])]);
}

#[test]
fn minimal_plane_with_quad_face_fails() {
	let err = decode_bytes(plane_stream(4)).expect_err("four-index face");
	assert!(matches!(
		err,
		XofError::NonTriangularFace {
			record: "Mesh",
			face: 0,
			count: 4
		}
	));
}

#[test]
fn unsupported_float_width_fails_before_tokens() {
	let bytes = StreamBuilder::with_header(*b"xof ", *b"0302", *b"bin ", *b"0016").raw(&[0xff, 0xff]).build();
	let err = decode_bytes(bytes).expect_err("0016 is not a float width");
	assert!(matches!(err, XofError::UnsupportedFloatWidth { width } if width == *b"0016"));
}

#[test]
fn decode_reads_from_disk() {
	let path = write_temp("minimal_plane.x", &plane_stream(3));
	let scene = decode(&path).expect("temp file decodes");
	assert_eq!(scene.meshes[0].triangle_indices(), vec![0, 1, 2]);
}

#[test]
fn missing_file_is_io_error() {
	let err = decode(fixture_path("does_not_exist.x")).expect_err("missing file");
	assert!(matches!(err, XofError::Io(_)));
}

#[test]
fn plane_fixture_decodes_full_mesh() {
	let scene = decode(fixture_path("plane.x")).expect("fixture decodes");
	assert_eq!(scene.meshes.len(), 1, "Frame and Header records are skipped");

	let mesh = scene.mesh_by_name("Plane").expect("plane mesh exists");
	assert_eq!(mesh.vertices[1], [1.0, 0.0, -1.0]);
	assert_eq!(mesh.faces, vec![Face([0, 1, 2]), Face([0, 2, 3])]);
	assert_eq!(mesh.normals.as_ref().map(|item| item.normals.clone()), Some(vec![[0.0, 1.0, 0.0]]));

	let list = mesh.material_list.as_ref().expect("material list exists");
	assert_eq!(list.face_indices, vec![0, 0]);
	let material = &list.materials[0];
	assert_eq!(material.face_color.red, 0.8);
	assert_eq!(material.specular_power, 20.0);
	assert_eq!(material.texture_filename.as_deref(), Some(&b"plane.png"[..]));

	let buffers = mesh.buffers();
	assert_eq!(buffers.triangle_count(), 2);
	assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
	assert_eq!(
		buffers.vertices[2],
		RenderVertex {
			position: [1.0, 0.0, 1.0],
			uv: [1.0, 1.0]
		}
	);
	assert_eq!(buffers.texture.as_deref(), Some(&b"plane.png"[..]));
}

#[test]
fn f64_fixture_matches_f32_fixture() {
	let narrow = XofFile::open(fixture_path("plane.x")).expect("fixture opens");
	let wide = XofFile::open(fixture_path("plane_f64.x")).expect("fixture opens");
	assert_eq!(narrow.header.float_width, FloatWidth::Bits32);
	assert_eq!(wide.header.float_width, FloatWidth::Bits64);
	assert_eq!(narrow.scene().expect("decodes"), wide.scene().expect("decodes"));
}

#[test]
fn quad_face_fixture_fails() {
	let err = decode(fixture_path("plane_quad_face.x")).expect_err("quad face");
	assert!(matches!(err, XofError::NonTriangularFace { face: 0, count: 4, .. }));
}

#[test]
fn meshes_keep_file_order() {
	let scene = decode(fixture_path("two_triangles.x")).expect("fixture decodes");
	let names: Vec<_> = scene.meshes.iter().map(|mesh| mesh.name.as_str()).collect();
	assert_eq!(names, ["Left", "Right"]);
	assert!(scene.meshes[1].buffers().vertices.iter().all(|vertex| vertex.uv == [0.0, 0.0]));
	assert_eq!(scene.meshes[1].texture_filename(), None);
}

#[test]
fn record_stats_cover_nested_records() {
	let file = XofFile::open(fixture_path("plane.x")).expect("fixture opens");
	let stats = file.scan_record_stats().expect("scan succeeds");
	assert_eq!(stats.top_level_count, 3);
	assert_eq!(stats.record_count, 9);
	assert_eq!(stats.mesh_count, 1);
	assert_eq!(stats.max_depth, 4);
	assert_eq!(stats.names.get("Material"), Some(&1));
	assert_eq!(stats.names.get("FrameTransformMatrix"), Some(&1));
}

#[test]
fn records_iterator_stops_after_error() {
	let bytes = StreamBuilder::new().open("Header", None).ints(&[1]).close().open("Broken", None).build();
	let file = XofFile::from_bytes(bytes).expect("header is valid");
	let mut records = file.records();
	assert_eq!(records.next().expect("first record").expect("parses").name, "Header");
	assert!(matches!(records.next(), Some(Err(XofError::UnexpectedToken { .. }))));
	assert!(records.next().is_none());
}

#[test]
fn empty_body_decodes_to_empty_scene() {
	let scene = decode_bytes(StreamBuilder::new().build()).expect("empty stream decodes");
	assert!(scene.meshes.is_empty());
}

#[test]
fn non_mesh_records_are_still_parsed() {
	let bytes = StreamBuilder::new().open("Frame", None).token(999).close().build();
	assert!(matches!(decode_bytes(bytes), Err(XofError::UnexpectedToken { .. })));
}

#[test]
fn legacy_code_page_texture_filename_survives_decode() {
	// Shift_JIS bytes for a kanji filename, not valid UTF-8.
	let filename = [0x96, 0xD8, b'.', b'p', b'n', b'g'];
	let bytes = StreamBuilder::new()
		.open("Mesh", Some("Tree"))
		.ints(&[3])
		.floats(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
		.ints(&[1, 3, 0, 1, 2])
		.open("MeshMaterialList", None)
		.ints(&[1, 1, 0])
		.open("Material", None)
		.floats(&[1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
		.open("TextureFilename", None)
		.string_bytes(&filename)
		.close()
		.close()
		.close()
		.close()
		.build();

	let scene = decode_bytes(bytes).expect("mesh decodes");
	let mesh = &scene.meshes[0];
	assert_eq!(mesh.texture_filename(), Some(&filename[..]));
	assert_eq!(mesh.buffers().texture, Some(filename.to_vec()));
}
