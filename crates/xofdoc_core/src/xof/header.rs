use crate::xof::bytes::Cursor;
use crate::xof::{Result, XofError};

/// Container encoding declared by the header format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// Tokenized binary stream (`bin `).
	Binary,
	/// Plain text (`txt `), recognized but not decoded.
	Text,
	/// MSZIP-compressed (`cmp `), recognized but not decoded.
	Compressed,
}

impl Format {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Binary => "binary",
			Self::Text => "text",
			Self::Compressed => "compressed",
		}
	}

	fn from_tag(tag: [u8; 4]) -> Option<Self> {
		match &tag {
			b"bin " => Some(Self::Binary),
			b"txt " => Some(Self::Text),
			b"cmp " => Some(Self::Compressed),
			_ => None,
		}
	}
}

/// Width of every float stored in the token stream, fixed once per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
	/// 32-bit IEEE floats (`0032`).
	Bits32,
	/// 64-bit IEEE floats (`0064`).
	Bits64,
}

impl FloatWidth {
	/// Element size in bytes.
	pub fn size(self) -> usize {
		match self {
			Self::Bits32 => 4,
			Self::Bits64 => 8,
		}
	}

	/// Bit width as a number.
	pub fn bits(self) -> u8 {
		match self {
			Self::Bits32 => 32,
			Self::Bits64 => 64,
		}
	}

	fn from_tag(tag: [u8; 4]) -> Option<Self> {
		match &tag {
			b"0032" => Some(Self::Bits32),
			b"0064" => Some(Self::Bits64),
			_ => None,
		}
	}
}

/// Parsed fixed 16-byte `.x` file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XofHeader {
	/// Raw version digits (for example `0302`).
	///
	/// Not validated: shipping encoders write `0303` where the format documents `0302`.
	pub version: [u8; 4],
	/// Container format. Always [`Format::Binary`] after a successful parse.
	pub format: Format,
	/// Float width used by every float list in the file.
	pub float_width: FloatWidth,
}

impl XofHeader {
	/// Header size in bytes.
	pub const SIZE: usize = 16;
	/// Leading file magic.
	pub const MAGIC: [u8; 4] = *b"xof ";

	/// Parse and validate a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		if bytes.len() < Self::SIZE {
			if bytes.len() >= 4 && bytes[0..4] != Self::MAGIC {
				return Err(XofError::BadMagic { magic: first4(bytes) });
			}
			return Err(XofError::TruncatedHeader { len: bytes.len() });
		}

		let mut cursor = Cursor::new(bytes);
		let magic = cursor.read_tag4()?;
		if magic != Self::MAGIC {
			return Err(XofError::BadMagic { magic });
		}

		let version = cursor.read_tag4()?;

		let format_tag = cursor.read_tag4()?;
		match Format::from_tag(format_tag) {
			Some(Format::Binary) => {}
			_ => return Err(XofError::UnsupportedFormat { format: format_tag }),
		}

		let width_tag = cursor.read_tag4()?;
		let float_width = FloatWidth::from_tag(width_tag).ok_or(XofError::UnsupportedFloatWidth { width: width_tag })?;

		Ok(Self {
			version,
			format: Format::Binary,
			float_width,
		})
	}

	/// Render the version digits as text, replacing non-printable bytes.
	pub fn version_label(&self) -> String {
		self.version
			.iter()
			.map(|byte| if byte.is_ascii_graphic() { char::from(*byte) } else { '.' })
			.collect()
	}
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}

#[cfg(test)]
mod tests;
