use std::fmt;

use crate::xof::bytes::Cursor;
use crate::xof::{FloatList, FloatWidth, Result, XofError, XofHeader};

/// One lexical token code of the binary stream.
///
/// Only the structural and list tokens are produced by the records this crate
/// understands. The primitive-type and template tokens are still classified so
/// that they surface as grammar errors rather than unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	/// Clean end of stream.
	None,
	/// Unrecognized token code.
	Error(i16),
	/// Length-prefixed identifier.
	Name,
	/// Length-prefixed string, terminated by `Comma` or `SemiColon`.
	String,
	/// Single integer.
	Integer,
	/// 16-byte GUID.
	Guid,
	/// Count-prefixed `u32` list.
	IntegerList,
	/// Count-prefixed float list.
	FloatList,
	/// `{`
	OpenBrace,
	/// `}`
	CloseBrace,
	/// `(`
	OpenParen,
	/// `)`
	CloseParen,
	/// `[`
	OpenBracket,
	/// `]`
	CloseBracket,
	/// `<`
	OpenAngle,
	/// `>`
	CloseAngle,
	/// `.`
	Dot,
	/// `,`
	Comma,
	/// `;`
	SemiColon,
	/// `template` keyword.
	Template,
	/// `WORD` primitive type.
	Word,
	/// `DWORD` primitive type.
	DoubleWord,
	/// `FLOAT` primitive type.
	Float,
	/// `DOUBLE` primitive type.
	Double,
	/// `CHAR` primitive type.
	Char,
	/// `UCHAR` primitive type.
	UnsignedChar,
	/// `SWORD` primitive type.
	SignedWord,
	/// `SDWORD` primitive type.
	SignedDoubleWord,
	/// `void` primitive type.
	Void,
	/// `LPSTR` primitive type.
	StringPointer,
	/// `UNICODE` primitive type.
	Unicode,
	/// `CSTRING` primitive type.
	CString,
	/// `array` keyword.
	Array,
}

impl Token {
	/// Classify a raw token code.
	pub fn from_code(code: i16) -> Self {
		match code {
			1 => Self::Name,
			2 => Self::String,
			3 => Self::Integer,
			5 => Self::Guid,
			6 => Self::IntegerList,
			7 => Self::FloatList,
			10 => Self::OpenBrace,
			11 => Self::CloseBrace,
			12 => Self::OpenParen,
			13 => Self::CloseParen,
			14 => Self::OpenBracket,
			15 => Self::CloseBracket,
			16 => Self::OpenAngle,
			17 => Self::CloseAngle,
			18 => Self::Dot,
			19 => Self::Comma,
			20 => Self::SemiColon,
			31 => Self::Template,
			40 => Self::Word,
			41 => Self::DoubleWord,
			42 => Self::Float,
			43 => Self::Double,
			44 => Self::Char,
			45 => Self::UnsignedChar,
			46 => Self::SignedWord,
			47 => Self::SignedDoubleWord,
			48 => Self::Void,
			49 => Self::StringPointer,
			50 => Self::Unicode,
			51 => Self::CString,
			52 => Self::Array,
			other => Self::Error(other),
		}
	}

	/// Stable label used in diagnostics.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "end of stream",
			Self::Error(_) => "unknown token",
			Self::Name => "name",
			Self::String => "string",
			Self::Integer => "integer",
			Self::Guid => "guid",
			Self::IntegerList => "integer list",
			Self::FloatList => "float list",
			Self::OpenBrace => "'{'",
			Self::CloseBrace => "'}'",
			Self::OpenParen => "'('",
			Self::CloseParen => "')'",
			Self::OpenBracket => "'['",
			Self::CloseBracket => "']'",
			Self::OpenAngle => "'<'",
			Self::CloseAngle => "'>'",
			Self::Dot => "'.'",
			Self::Comma => "','",
			Self::SemiColon => "';'",
			Self::Template => "template",
			Self::Word => "WORD",
			Self::DoubleWord => "DWORD",
			Self::Float => "FLOAT",
			Self::Double => "DOUBLE",
			Self::Char => "CHAR",
			Self::UnsignedChar => "UCHAR",
			Self::SignedWord => "SWORD",
			Self::SignedDoubleWord => "SDWORD",
			Self::Void => "void",
			Self::StringPointer => "LPSTR",
			Self::Unicode => "UNICODE",
			Self::CString => "CSTRING",
			Self::Array => "array",
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Error(code) => write!(f, "unknown token code {code}"),
			other => f.write_str(other.as_str()),
		}
	}
}

/// Sequential reader over the token stream that follows the header.
///
/// The reader has no grammar knowledge. After [`TokenReader::next_token`]
/// classifies a code, the caller reads the matching payload with one of the
/// `read_*` methods.
pub struct TokenReader<'a> {
	cursor: Cursor<'a>,
	float_width: FloatWidth,
}

impl<'a> TokenReader<'a> {
	/// Create a reader positioned just past the header.
	pub fn new(bytes: &'a [u8], header: XofHeader) -> Self {
		Self {
			cursor: Cursor::at(bytes, XofHeader::SIZE),
			float_width: header.float_width,
		}
	}

	/// Current byte offset within the file.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}

	/// Read and classify the next 2-byte token code.
	///
	/// Returns [`Token::None`] only when no bytes remain.
	pub fn next_token(&mut self) -> Result<Token> {
		if self.cursor.remaining() == 0 {
			return Ok(Token::None);
		}
		let code = self.cursor.read_i16_le()?;
		Ok(Token::from_code(code))
	}

	/// Read a `Name` payload. Names must be valid UTF-8.
	pub fn read_name(&mut self) -> Result<String> {
		let at = self.cursor.pos();
		let raw = self.read_bytes()?;
		String::from_utf8(raw.to_vec()).map_err(|err| XofError::InvalidName {
			at,
			valid_up_to: err.utf8_error().valid_up_to(),
		})
	}

	/// Read a `String` payload body, without its terminator token.
	///
	/// The bytes are kept as stored. Filenames in older files are often in a
	/// legacy multibyte code page.
	pub fn read_string(&mut self) -> Result<Vec<u8>> {
		Ok(self.read_bytes()?.to_vec())
	}

	/// Read an `IntegerList` payload.
	pub fn read_integer_list(&mut self) -> Result<Vec<u32>> {
		let count = self.cursor.read_count(4)?;
		let mut out = Vec::with_capacity(count);
		for _ in 0..count {
			out.push(self.cursor.read_u32_le()?);
		}
		Ok(out)
	}

	/// Read a `FloatList` payload using the file float width.
	pub fn read_float_list(&mut self) -> Result<FloatList> {
		let count = self.cursor.read_count(self.float_width.size())?;
		match self.float_width {
			FloatWidth::Bits32 => {
				let mut out = Vec::with_capacity(count);
				for _ in 0..count {
					out.push(self.cursor.read_f32_le()?);
				}
				Ok(FloatList::F32(out))
			}
			FloatWidth::Bits64 => {
				let mut out = Vec::with_capacity(count);
				for _ in 0..count {
					out.push(self.cursor.read_f64_le()?);
				}
				Ok(FloatList::F64(out))
			}
		}
	}

	fn read_bytes(&mut self) -> Result<&'a [u8]> {
		let len = self.cursor.read_count(1)?;
		self.cursor.read_exact(len)
	}
}
