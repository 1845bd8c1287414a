use serde_json::json;

use crate::cmd::test_support::{fixture_arg, run_xofdoc, run_xofdoc_json};

#[test]
fn buffers_json_interleaves_positions_and_uvs() {
	let fixture = fixture_arg("plane.x");
	let json = run_xofdoc_json(&["buffers", &fixture, "--json"]);

	let mesh = &json["meshes"][0];
	assert_eq!(mesh["name"], "Plane");
	assert_eq!(mesh["texture"], "plane.png");
	assert_eq!(mesh["triangle_count"], 2);
	assert_eq!(mesh["indices"], json!([0, 1, 2, 0, 2, 3]));
	assert_eq!(mesh["vertices"][3], json!({ "position": [-1.0, 0.0, 1.0], "uv": [0.0, 1.0] }));
}

#[test]
fn buffers_selects_mesh_by_name() {
	let fixture = fixture_arg("two_triangles.x");
	let json = run_xofdoc_json(&["buffers", &fixture, "--mesh", "Right", "--json"]);

	let meshes = json["meshes"].as_array().expect("meshes is an array");
	assert_eq!(meshes.len(), 1);
	assert_eq!(meshes[0]["name"], "Right");
	assert!(meshes[0]["texture"].is_null());
	assert_eq!(meshes[0]["vertices"][1]["uv"], json!([0.0, 0.0]));
}

#[test]
fn buffers_unknown_mesh_fails() {
	let fixture = fixture_arg("two_triangles.x");
	let output = run_xofdoc(&["buffers", &fixture, "--mesh", "Missing"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("mesh not found: \"Missing\""));
}
