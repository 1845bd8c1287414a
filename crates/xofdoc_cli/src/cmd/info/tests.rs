use crate::cmd::test_support::{fixture_arg, run_xofdoc, run_xofdoc_json};

#[test]
fn info_json_reports_header_and_record_stats() {
	let fixture = fixture_arg("plane.x");
	let json = run_xofdoc_json(&["info", &fixture, "--json"]);

	assert_eq!(json["version"], "0302");
	assert_eq!(json["format"], "binary");
	assert_eq!(json["float_bits"], 32);
	assert_eq!(json["top_level_count"], 3);
	assert_eq!(json["record_count"], 9);
	assert_eq!(json["mesh_count"], 1);
	assert_eq!(json["max_depth"], 4);

	let names = json["top_names"].as_array().expect("top_names is an array");
	assert_eq!(names.len(), 9);
	assert!(names.iter().all(|item| item["count"] == 1));
	assert_eq!(names[0]["name"], "Frame", "ties sort by name");
}

#[test]
fn info_reports_64bit_float_width() {
	let fixture = fixture_arg("plane_f64.x");
	let json = run_xofdoc_json(&["info", &fixture, "--json"]);
	assert_eq!(json["float_bits"], 64);
}

#[test]
fn info_does_not_extract_meshes() {
	let fixture = fixture_arg("plane_quad_face.x");
	let json = run_xofdoc_json(&["info", &fixture, "--json"]);
	assert_eq!(json["mesh_count"], 1);
}

#[test]
fn info_text_output_lists_names() {
	let fixture = fixture_arg("two_triangles.x");
	let output = run_xofdoc(&["info", &fixture]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("mesh_count: 2"));
	assert!(stdout.contains("  Mesh: 2"));
}
