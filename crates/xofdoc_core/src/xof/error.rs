use thiserror::Error;

use crate::xof::Token;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, XofError>;

/// Errors produced while reading, tokenizing, and extracting `.x` data.
#[derive(Debug, Error)]
pub enum XofError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// File is shorter than the fixed 16-byte header.
	#[error("truncated header: {len} bytes, need 16")]
	TruncatedHeader {
		/// Bytes available.
		len: usize,
	},
	/// Leading magic is not `xof `.
	#[error("not an .x file (magic={magic:?})")]
	BadMagic {
		/// First four bytes of the stream.
		magic: [u8; 4],
	},
	/// Format tag is not the binary variant.
	#[error("unsupported container format {format:?} (expected \"bin \")")]
	UnsupportedFormat {
		/// Raw format tag.
		format: [u8; 4],
	},
	/// Float width tag is neither `0032` nor `0064`.
	#[error("unsupported float width {width:?} (expected \"0032\" or \"0064\")")]
	UnsupportedFloatWidth {
		/// Raw float width tag.
		width: [u8; 4],
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Grammar violation while building the record tree.
	#[error("unexpected token {got} at offset {at}, expected {expected}")]
	UnexpectedToken {
		/// Byte offset of the offending token code.
		at: usize,
		/// Human-readable description of what the grammar allowed.
		expected: &'static str,
		/// Token actually read.
		got: Token,
	},
	/// A `Name` payload is not valid UTF-8.
	#[error("invalid utf-8 in name at offset {at} (valid up to byte {valid_up_to})")]
	InvalidName {
		/// Byte offset of the name payload.
		at: usize,
		/// Length of the valid UTF-8 prefix.
		valid_up_to: usize,
	},
	/// A record's field shape does not match its expected kind.
	#[error("schema mismatch in {record}: {detail}")]
	SchemaMismatch {
		/// Record kind being extracted.
		record: &'static str,
		/// What was wrong with the record.
		detail: String,
	},
	/// A face or face-normal group did not hold exactly three indices.
	#[error("non-triangular face in {record}: face {face} has {count} indices")]
	NonTriangularFace {
		/// Record kind holding the face table.
		record: &'static str,
		/// Zero-based face position within the table.
		face: usize,
		/// Index count declared by the face group.
		count: u32,
	},
	/// Requested mesh name was not found in the scene.
	///
	/// This is a lookup failure on an already decoded scene, never a decode failure.
	#[error("mesh not found: {name:?}")]
	MeshNotFound {
		/// Requested mesh name.
		name: String,
	},
}

impl XofError {
	pub(crate) fn schema(record: &'static str, detail: impl Into<String>) -> Self {
		Self::SchemaMismatch {
			record,
			detail: detail.into(),
		}
	}
}
