use std::path::PathBuf;

use xofdoc::xof::Result;

use crate::cmd::util::{emit_json, open_file};

const TOP_NAMES: usize = 12;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header fields and record statistics.
///
/// Only builds record trees; mesh extraction is not run.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = open_file(&path)?;
	let stats = file.scan_record_stats()?;

	let mut entries: Vec<_> = stats.names.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			version: file.header.version_label(),
			format: file.header.format.as_str(),
			float_bits: file.header.float_width.bits(),
			size: file.bytes().len(),
			top_level_count: stats.top_level_count,
			record_count: stats.record_count,
			mesh_count: stats.mesh_count,
			max_depth: stats.max_depth,
			top_names: entries
				.iter()
				.take(TOP_NAMES)
				.map(|(name, count)| NameCountJson {
					name: name.clone(),
					count: *count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("version: {}", file.header.version_label());
	println!("format: {}", file.header.format.as_str());
	println!("float_bits: {}", file.header.float_width.bits());
	println!("size: {}", file.bytes().len());
	println!("top_level_count: {}", stats.top_level_count);
	println!("record_count: {}", stats.record_count);
	println!("mesh_count: {}", stats.mesh_count);
	println!("max_depth: {}", stats.max_depth);

	println!("top_names:");
	for (name, count) in entries.into_iter().take(TOP_NAMES) {
		println!("  {name}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct NameCountJson {
	name: String,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	version: String,
	format: &'static str,
	float_bits: u8,
	size: usize,
	top_level_count: u32,
	record_count: u32,
	mesh_count: u32,
	max_depth: usize,
	top_names: Vec<NameCountJson>,
}

#[cfg(test)]
mod tests;
