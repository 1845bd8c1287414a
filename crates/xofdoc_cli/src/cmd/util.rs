use std::io::Write;
use std::path::Path;

use log::debug;
use xofdoc::xof::{Result, XofFile};

/// Open a file and log its header.
pub(crate) fn open_file(path: &Path) -> Result<XofFile> {
	let file = XofFile::open(path)?;
	debug!(
		"opened {} (version {}, {}-bit floats)",
		path.display(),
		file.header.version_label(),
		file.header.float_width.bits()
	);
	Ok(file)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	let mut out = std::io::stdout().lock();
	writeln!(out, "{text}")?;
	Ok(())
}

/// Render raw string payload bytes for display. Invalid UTF-8 is replaced.
pub(crate) fn display_text(bytes: &[u8]) -> String {
	String::from_utf8_lossy(bytes).into_owned()
}

/// Shorten `input` to `max_len` characters, marking the cut.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
