use super::{expect_field_count, expect_name, field};
use crate::xof::{Field, Record, Result, XofError};

const KIND: &str = "TextureFilename";

/// Extract the single string field of a `TextureFilename` record.
pub fn extract_texture_filename(record: &Record) -> Result<Vec<u8>> {
	expect_name(record, KIND)?;
	expect_field_count(record, KIND, 1)?;

	match field(record, KIND, 0)? {
		Field::String(value) => Ok(value.clone()),
		other => Err(XofError::schema(KIND, format!("field 0 holds {}, expected string", other.kind()))),
	}
}
