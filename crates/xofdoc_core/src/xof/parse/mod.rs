use log::trace;

use crate::xof::{Field, Record, Result, Token, TokenReader, XofError};

/// Recursive-descent builder for generic record trees.
///
/// Grammar, with one token of lookahead:
///
/// ```text
/// record := Name [Name] '{' field* '}'
/// field  := record | integer-list | float-list | string
/// string := String payload (',' | ';')
/// ```
pub struct RecordParser<'a> {
	tokens: TokenReader<'a>,
	lookahead: Token,
	lookahead_at: usize,
}

impl<'a> RecordParser<'a> {
	/// Prime the lookahead with the first token after the header.
	pub fn new(mut tokens: TokenReader<'a>) -> Result<Self> {
		let lookahead_at = tokens.pos();
		let lookahead = tokens.next_token()?;
		Ok(Self {
			tokens,
			lookahead,
			lookahead_at,
		})
	}

	/// Return `true` once the stream ended cleanly.
	pub fn at_end(&self) -> bool {
		self.lookahead == Token::None
	}

	/// Parse one record starting at the lookahead `Name`, consuming its closing brace.
	pub fn parse_record(&mut self) -> Result<Record> {
		self.expect(Token::Name, "record name")?;
		let name = self.tokens.read_name()?;
		self.advance()?;

		let mut optional_name = String::new();
		if self.lookahead == Token::Name {
			optional_name = self.tokens.read_name()?;
			self.advance()?;
		}

		self.expect(Token::OpenBrace, "'{' or instance name")?;
		self.advance()?;
		trace!("record {name:?} ({optional_name:?}) body at offset {}", self.lookahead_at);

		let mut fields = Vec::new();
		while self.lookahead != Token::CloseBrace {
			let field = match self.lookahead {
				Token::Name => Field::Record(Box::new(self.parse_record()?)),
				Token::IntegerList => {
					let values = self.tokens.read_integer_list()?;
					self.advance()?;
					Field::Integers(values)
				}
				Token::FloatList => {
					let values = self.tokens.read_float_list()?;
					self.advance()?;
					Field::Floats(values)
				}
				Token::String => Field::String(self.parse_string()?),
				got => {
					return Err(XofError::UnexpectedToken {
						at: self.lookahead_at,
						expected: "field or '}'",
						got,
					});
				}
			};
			fields.push(field);
		}
		self.advance()?;

		Ok(Record {
			name,
			optional_name,
			fields,
		})
	}

	/// Parse the next top-level record, or return `None` at a clean end of stream.
	pub fn next_record(&mut self) -> Result<Option<Record>> {
		if self.at_end() {
			return Ok(None);
		}
		self.parse_record().map(Some)
	}

	fn parse_string(&mut self) -> Result<Vec<u8>> {
		let value = self.tokens.read_string()?;
		self.advance()?;
		match self.lookahead {
			Token::Comma | Token::SemiColon => {
				self.advance()?;
				Ok(value)
			}
			got => Err(XofError::UnexpectedToken {
				at: self.lookahead_at,
				expected: "',' or ';' after string",
				got,
			}),
		}
	}

	fn expect(&self, token: Token, expected: &'static str) -> Result<()> {
		if self.lookahead == token {
			return Ok(());
		}
		Err(XofError::UnexpectedToken {
			at: self.lookahead_at,
			expected,
			got: self.lookahead,
		})
	}

	fn advance(&mut self) -> Result<()> {
		self.lookahead_at = self.tokens.pos();
		self.lookahead = self.tokens.next_token()?;
		Ok(())
	}
}
