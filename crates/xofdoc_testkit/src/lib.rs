//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to a uniquely named file under the system temp directory.
pub fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("xofdoc-test-{}", std::process::id()));
	std::fs::create_dir_all(&dir).expect("temp dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("temp file is writable");
	path
}

/// Token codes used by [`StreamBuilder`].
pub mod code {
	/// `Name` token.
	pub const NAME: i16 = 1;
	/// `String` token.
	pub const STRING: i16 = 2;
	/// `GUID` token.
	pub const GUID: i16 = 5;
	/// `IntegerList` token.
	pub const INTEGER_LIST: i16 = 6;
	/// `FloatList` token.
	pub const FLOAT_LIST: i16 = 7;
	/// `{` token.
	pub const OPEN_BRACE: i16 = 10;
	/// `}` token.
	pub const CLOSE_BRACE: i16 = 11;
	/// `,` token.
	pub const COMMA: i16 = 19;
	/// `;` token.
	pub const SEMICOLON: i16 = 20;
	/// `template` token.
	pub const TEMPLATE: i16 = 31;
}

/// Byte-level builder for synthetic binary `.x` streams.
///
/// Emits raw tokens with no grammar checks so tests can produce malformed input.
#[derive(Debug, Clone, Default)]
pub struct StreamBuilder {
	bytes: Vec<u8>,
	f64_floats: bool,
}

impl StreamBuilder {
	/// Start a stream with a `xof 0302bin 0032` header.
	pub fn new() -> Self {
		Self::with_header(*b"xof ", *b"0302", *b"bin ", *b"0032")
	}

	/// Start a stream with a `xof 0302bin 0064` header.
	pub fn new_f64() -> Self {
		let mut out = Self::with_header(*b"xof ", *b"0302", *b"bin ", *b"0064");
		out.f64_floats = true;
		out
	}

	/// Start a stream with arbitrary header tags.
	pub fn with_header(magic: [u8; 4], version: [u8; 4], format: [u8; 4], float_width: [u8; 4]) -> Self {
		let mut bytes = Vec::with_capacity(64);
		bytes.extend_from_slice(&magic);
		bytes.extend_from_slice(&version);
		bytes.extend_from_slice(&format);
		bytes.extend_from_slice(&float_width);
		Self {
			bytes,
			f64_floats: &float_width == b"0064",
		}
	}

	/// Append a raw token code.
	pub fn token(mut self, code: i16) -> Self {
		self.bytes.extend_from_slice(&code.to_le_bytes());
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append a `Name` token and payload.
	pub fn name(self, name: &str) -> Self {
		self.name_bytes(name.as_bytes())
	}

	/// Append a `Name` token with a raw, possibly non-UTF-8, payload.
	pub fn name_bytes(self, name: &[u8]) -> Self {
		self.token(code::NAME).text(name)
	}

	/// Append `Name [Name] {` opening a record.
	pub fn open(self, name: &str, label: Option<&str>) -> Self {
		let out = self.name(name);
		let out = match label {
			Some(label) => out.name(label),
			None => out,
		};
		out.token(code::OPEN_BRACE)
	}

	/// Append `}`.
	pub fn close(self) -> Self {
		self.token(code::CLOSE_BRACE)
	}

	/// Append an `IntegerList` token and payload.
	pub fn ints(mut self, values: &[u32]) -> Self {
		self = self.token(code::INTEGER_LIST);
		self.bytes.extend_from_slice(&(values.len() as u32).to_le_bytes());
		for value in values {
			self.bytes.extend_from_slice(&value.to_le_bytes());
		}
		self
	}

	/// Append a `FloatList` token and payload using the header float width.
	pub fn floats(mut self, values: &[f64]) -> Self {
		self = self.token(code::FLOAT_LIST);
		self.bytes.extend_from_slice(&(values.len() as u32).to_le_bytes());
		for value in values {
			if self.f64_floats {
				self.bytes.extend_from_slice(&value.to_le_bytes());
			} else {
				self.bytes.extend_from_slice(&(*value as f32).to_le_bytes());
			}
		}
		self
	}

	/// Append a `String` token, payload, and `;` terminator.
	pub fn string(self, value: &str) -> Self {
		self.string_bytes(value.as_bytes())
	}

	/// Append a `String` token with a raw payload and `;` terminator.
	pub fn string_bytes(self, value: &[u8]) -> Self {
		self.token(code::STRING).text(value).token(code::SEMICOLON)
	}

	/// Return the finished byte stream.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}

	fn text(mut self, value: &[u8]) -> Self {
		self.bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
		self.bytes.extend_from_slice(value);
		self
	}
}

/// Stream holding one triangulated `Mesh "Plane"` with four vertices and one face.
///
/// Pass `face_index_count = 3` for a valid file.
pub fn plane_stream(face_index_count: u32) -> Vec<u8> {
	StreamBuilder::new()
		.open("Mesh", Some("Plane"))
		.ints(&[4])
		.floats(&[-1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 0.0, 1.0, -1.0, 0.0, 1.0])
		.ints(&[1, face_index_count, 0, 1, 2])
		.close()
		.build()
}
