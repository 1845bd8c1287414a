use std::path::PathBuf;

use xofdoc::xof::{Field, FloatList, Record, Result};

use crate::cmd::util::{display_text, open_file, truncate};

/// Output truncation limits for printed record trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum nested record depth printed in full.
	pub max_depth: u32,
	/// Maximum list elements printed per field.
	pub max_list_items: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_depth: 8,
			max_list_items: 12,
			max_string_len: 200,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub max_items: Option<usize>,
}

/// Print every top-level record as an indented tree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, max_depth, max_items } = args;
	let defaults = PrintOptions::default();
	let options = PrintOptions {
		max_depth: max_depth.unwrap_or(defaults.max_depth),
		max_list_items: max_items.unwrap_or(defaults.max_list_items),
		..defaults
	};

	let file = open_file(&path)?;
	println!("path: {}", path.display());
	for record in file.records() {
		let mut lines = Vec::new();
		render_record(&record?, 0, 0, options, &mut lines);
		for line in lines {
			println!("{line}");
		}
	}

	Ok(())
}

/// Render one record tree into output lines.
pub fn render_record(record: &Record, indent: usize, depth: u32, options: PrintOptions, out: &mut Vec<String>) {
	let pad = " ".repeat(indent);
	let head = if record.optional_name.is_empty() {
		record.name.clone()
	} else {
		format!("{} {:?}", record.name, record.optional_name)
	};

	if depth >= options.max_depth {
		out.push(format!("{pad}{head} {{ ... {} fields }}", record.fields.len()));
		return;
	}

	out.push(format!("{pad}{head} {{"));
	for field in &record.fields {
		match field {
			Field::Record(child) => render_record(child, indent + 2, depth + 1, options, out),
			Field::Integers(values) => out.push(format!("{pad}  ints[{}] {}", values.len(), list(values, options))),
			Field::Floats(FloatList::F32(values)) => out.push(format!("{pad}  floats[{}] {}", values.len(), list(values, options))),
			Field::Floats(FloatList::F64(values)) => out.push(format!("{pad}  doubles[{}] {}", values.len(), list(values, options))),
			Field::String(value) => out.push(format!("{pad}  \"{}\"", truncate(&display_text(value), options.max_string_len))),
		}
	}
	out.push(format!("{pad}}}"));
}

fn list<T: ToString>(values: &[T], options: PrintOptions) -> String {
	let mut parts: Vec<String> = values.iter().take(options.max_list_items).map(ToString::to_string).collect();
	if values.len() > options.max_list_items {
		parts.push(format!("... {} more", values.len() - options.max_list_items));
	}
	parts.join(" ")
}
