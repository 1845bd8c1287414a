use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use xofdoc_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static XOFDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_xofdoc(args: &[&str]) -> Output {
	Command::new(xofdoc_bin()).args(args).output().expect("xofdoc command executes")
}

pub(crate) fn run_xofdoc_json(args: &[&str]) -> serde_json::Value {
	let output = run_xofdoc(args);
	assert!(
		output.status.success(),
		"xofdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn xofdoc_bin() -> &'static PathBuf {
	XOFDOC_BIN.get_or_init(resolve_xofdoc_bin)
}

fn resolve_xofdoc_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_xofdoc") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = workspace_target_dir().join("debug");
	bin.push(if cfg!(windows) { "xofdoc.exe" } else { "xofdoc" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "xofdoc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build xofdoc binary at {}", bin.display());

	bin
}
