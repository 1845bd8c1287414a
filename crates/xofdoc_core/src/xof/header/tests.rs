use crate::xof::{FloatWidth, Format, XofError, XofHeader};

const VALID: &[u8; 16] = b"xof 0302bin 0032";

#[test]
fn parses_binary_32bit_header() {
	let header = XofHeader::parse(VALID).expect("header parses");
	assert_eq!(header.version, *b"0302");
	assert_eq!(header.version_label(), "0302");
	assert_eq!(header.format, Format::Binary);
	assert_eq!(header.float_width, FloatWidth::Bits32);
}

#[test]
fn parses_binary_64bit_header() {
	let header = XofHeader::parse(b"xof 0303bin 0064").expect("header parses");
	assert_eq!(header.float_width, FloatWidth::Bits64);
	assert_eq!(header.float_width.size(), 8);
}

#[test]
fn ignores_version_digits() {
	let header = XofHeader::parse(b"xof \0\0\xffzbin 0032").expect("any version is accepted");
	assert_eq!(header.version_label(), "...z");
}

#[test]
fn rejects_text_and_compressed_formats() {
	let err = XofHeader::parse(b"xof 0302txt 0032").expect_err("text variant should fail");
	assert!(matches!(err, XofError::UnsupportedFormat { format } if format == *b"txt "));

	let err = XofHeader::parse(b"xof 0302cmp 0032").expect_err("compressed variant should fail");
	assert!(matches!(err, XofError::UnsupportedFormat { format } if format == *b"cmp "));
}

#[test]
fn rejects_16bit_float_width() {
	let err = XofHeader::parse(b"xof 0302bin 0016").expect_err("0016 should fail");
	assert!(matches!(err, XofError::UnsupportedFloatWidth { width } if width == *b"0016"));
}

#[test]
fn rejects_short_input() {
	let err = XofHeader::parse(b"xof 0302").expect_err("short header should fail");
	assert!(matches!(err, XofError::TruncatedHeader { len: 8 }));

	let err = XofHeader::parse(b"BLENDER").expect_err("foreign magic should fail");
	assert!(matches!(err, XofError::BadMagic { .. }));
}

#[test]
fn any_corrupted_validated_byte_fails() {
	// Bytes 4..8 hold the version and are deliberately not checked.
	for pos in (0..4).chain(8..16) {
		let mut bytes = *VALID;
		bytes[pos] ^= 0x40;
		let result = XofHeader::parse(&bytes);
		assert!(result.is_err(), "corrupting byte {pos} should fail");
		match pos {
			0..4 => assert!(matches!(result, Err(XofError::BadMagic { .. }))),
			8..12 => assert!(matches!(result, Err(XofError::UnsupportedFormat { .. }))),
			_ => assert!(matches!(result, Err(XofError::UnsupportedFloatWidth { .. }))),
		}
	}
}
