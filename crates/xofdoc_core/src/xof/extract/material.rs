use super::{expect_field_count, expect_name, floats, nested};
use crate::xof::{ColorRgb, ColorRgba, Material, Record, Result, extract_texture_filename};

const KIND: &str = "Material";

/// Extract a `Material` record.
///
/// Field 0 holds 11 floats: face RGBA, specular power, specular RGB, emissive RGB.
/// An optional field 1 must be a `TextureFilename` record.
pub fn extract_material(record: &Record) -> Result<Material> {
	expect_name(record, KIND)?;
	expect_field_count(record, KIND, 2)?;

	let values = floats(record, KIND, 0, 11)?.to_f32_vec();
	let texture_filename = match record.fields.len() {
		2 => Some(extract_texture_filename(nested(record, KIND, 1)?)?),
		_ => None,
	};

	Ok(Material {
		face_color: ColorRgba {
			red: values[0],
			green: values[1],
			blue: values[2],
			alpha: values[3],
		},
		specular_power: values[4],
		specular_color: ColorRgb {
			red: values[5],
			green: values[6],
			blue: values[7],
		},
		emissive_color: ColorRgb {
			red: values[8],
			green: values[9],
			blue: values[10],
		},
		texture_filename,
	})
}
