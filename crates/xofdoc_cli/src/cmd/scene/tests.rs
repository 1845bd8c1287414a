use crate::cmd::test_support::{fixture_arg, run_xofdoc, run_xofdoc_json};

#[test]
fn scene_json_summarizes_plane_mesh() {
	let fixture = fixture_arg("plane.x");
	let json = run_xofdoc_json(&["scene", &fixture, "--json"]);

	let meshes = json["meshes"].as_array().expect("meshes is an array");
	assert_eq!(meshes.len(), 1);
	let mesh = &meshes[0];
	assert_eq!(mesh["name"], "Plane");
	assert_eq!(mesh["vertex_count"], 4);
	assert_eq!(mesh["face_count"], 2);
	assert_eq!(mesh["normal_count"], 1);
	assert_eq!(mesh["texture_coord_count"], 4);
	assert_eq!(mesh["face_material_indices"], serde_json::json!([0, 0]));
	assert_eq!(mesh["materials"][0]["specular_power"], 20.0);
	assert_eq!(mesh["materials"][0]["texture_filename"], "plane.png");
}

#[test]
fn scene_json_reports_missing_optional_parts_as_null() {
	let fixture = fixture_arg("two_triangles.x");
	let json = run_xofdoc_json(&["scene", &fixture, "--json"]);
	let mesh = &json["meshes"][1];
	assert_eq!(mesh["name"], "Right");
	assert!(mesh["normal_count"].is_null());
	assert!(mesh["texture_coord_count"].is_null());
	assert!(mesh["materials"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn scene_fails_on_non_triangular_face() {
	let fixture = fixture_arg("plane_quad_face.x");
	let output = run_xofdoc(&["scene", &fixture, "--json"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty(), "no partial scene is printed");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("non-triangular face in Mesh: face 0 has 4 indices"), "stderr: {stderr}");
}
