//! Recursive-descent JSON parser producing [`JsonValue`] trees.
//!
//! The parser works byte by byte on a [`ByteReader`], so malformed input is
//! reported with its position and a snippet of the surrounding text.

use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_reader::ByteReader;
use anyhow::{Error, Result};
use std::{collections::BTreeMap, io::Cursor};

/// Parse a complete JSON document from a string.
///
/// Unlike a streaming parser, this rejects trailing non-whitespace input
/// after the document.
///
/// # Errors
/// Returns an error naming the byte position and quoting the surrounding
/// input if the document is malformed.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut reader = ByteReader::new(Cursor::new(json));
	let value = parse_value(&mut reader)?;
	reader.skip_whitespace();
	if reader.peek().is_some() {
		return Err(reader.error("unexpected trailing characters"));
	}
	Ok(value)
}

fn parse_value(reader: &mut ByteReader) -> Result<JsonValue> {
	reader.skip_whitespace();
	match reader.expect_peek()? {
		b'[' => parse_array(reader),
		b'{' => parse_object(reader),
		b'"' => parse_string(reader).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_number(reader).map(JsonValue::Number),
		b't' => parse_tag(reader, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(reader, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(reader, "null").map(|()| JsonValue::Null),
		c => Err(reader.error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_object(reader: &mut ByteReader) -> Result<JsonValue> {
	let mut entries: BTreeMap<String, JsonValue> = BTreeMap::new();
	reader.advance(); // opening '{' was peeked by the caller

	loop {
		reader.skip_whitespace();
		match reader.expect_peek()? {
			b'}' => {
				reader.advance();
				break;
			}
			b'"' => {
				let key = parse_string(reader)?;

				reader.skip_whitespace();
				if reader.expect_next()? != b':' {
					return Err(reader.error("expected ':'"));
				}

				let value = parse_value(reader)?;
				entries.insert(key, value);

				reader.skip_whitespace();
				match reader.expect_next()? {
					b',' => {}
					b'}' => break,
					_ => return Err(reader.error("expected ',' or '}'")),
				}
			}
			_ => return Err(reader.error("expected '\"' or '}' in object")),
		}
	}
	Ok(JsonValue::Object(JsonObject(entries)))
}

fn parse_array(reader: &mut ByteReader) -> Result<JsonValue> {
	let mut entries: Vec<JsonValue> = Vec::new();
	reader.advance(); // opening '[' was peeked by the caller

	reader.skip_whitespace();
	if let Some(b']') = reader.peek() {
		reader.advance();
		return Ok(JsonValue::Array(JsonArray(entries)));
	}

	entries.push(parse_value(reader)?);

	loop {
		reader.skip_whitespace();
		match reader.expect_next()? {
			b']' => break,
			b',' => entries.push(parse_value(reader)?),
			_ => return Err(reader.error("expected ',' or ']'")),
		}
	}
	Ok(JsonValue::Array(JsonArray(entries)))
}

fn parse_string(reader: &mut ByteReader) -> Result<String> {
	reader.skip_whitespace();
	if reader.expect_next()? != b'"' {
		return Err(reader.error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	let mut hex = [0u8; 4];

	loop {
		match reader.expect_next()? {
			b'"' => break,
			b'\\' => match reader.expect_next()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					for digit in &mut hex {
						*digit = reader.expect_next()?;
					}
					let code_point = std::str::from_utf8(&hex)
						.ok()
						.and_then(|h| u16::from_str_radix(h, 16).ok())
						.ok_or_else(|| reader.error("invalid unicode escape"))?;
					bytes.extend_from_slice(
						&String::from_utf16(&[code_point])
							.map_err(|_| reader.error("invalid unicode escape"))?
							.into_bytes(),
					);
				}
				c => bytes.push(c),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

fn parse_number(reader: &mut ByteReader) -> Result<f64> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = reader.peek() {
		number.push(reader.expect_next()?);
	}

	let mut integer_digits = false;
	while let Some(b'0'..=b'9') = reader.peek() {
		integer_digits = true;
		number.push(reader.expect_next()?);
	}
	if !integer_digits {
		return Err(reader.error("expected digits in number"));
	}

	if let Some(b'.') = reader.peek() {
		number.push(reader.expect_next()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = reader.peek() {
			fraction_digits = true;
			number.push(reader.expect_next()?);
		}
		if !fraction_digits {
			return Err(reader.error("expected digits after decimal point"));
		}
		if let Some(b'.') = reader.peek() {
			return Err(reader.error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = reader.peek() {
		number.push(reader.expect_next()?);
		if let Some(b'+' | b'-') = reader.peek() {
			number.push(reader.expect_next()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = reader.peek() {
			exponent_digits = true;
			number.push(reader.expect_next()?);
		}
		if !exponent_digits {
			return Err(reader.error("expected digits after exponent"));
		}
	}

	String::from_utf8_lossy(&number)
		.parse::<f64>()
		.map_err(|_| reader.error("invalid number"))
}

fn parse_tag(reader: &mut ByteReader, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if reader.expect_next()? != expected {
			return Err(reader.error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	#[test]
	fn test_nested_document() {
		let data = r#"{"users":{"user1":{"city":"Nantes"},"user2":{"age":30}},"countries":["France","Belgium"]}"#;
		let json = parse_json_str(data).unwrap();
		assert_eq!(
			json,
			v(vec![
				(
					"users",
					v(vec![
						("user1", v(vec![("city", "Nantes")])),
						("user2", v(vec![("age", v(30))])),
					])
				),
				("countries", v(vec!["France", "Belgium"])),
			])
		);
	}

	#[rstest]
	#[case("{}", JsonValue::Object(JsonObject::new()))]
	#[case("[]", JsonValue::Array(JsonArray::default()))]
	#[case("null", JsonValue::Null)]
	#[case("true", JsonValue::Boolean(true))]
	#[case("false", JsonValue::Boolean(false))]
	#[case("42", JsonValue::Number(42.0))]
	#[case("-12.5", JsonValue::Number(-12.5))]
	#[case("2e3", JsonValue::Number(2000.0))]
	#[case("\"text\"", JsonValue::String("text".to_string()))]
	fn test_simple_values(#[case] input: &str, #[case] expected: JsonValue) {
		assert_eq!(parse_json_str(input).unwrap(), expected);
	}

	#[test]
	fn test_whitespace_everywhere() {
		let data = "_{_\"a\"_:_[_7_,_true_,_null_,_\"g\"_]_}_";

		let expected = v(vec![(
			"a",
			v(vec![v(7), v(true), JsonValue::Null, v("g")]),
		)]);

		for filler in ["", " ", "\t", "\n", "\r"] {
			assert_eq!(parse_json_str(&data.replace('_', filler)).unwrap(), expected);
		}
	}

	#[test]
	fn test_string_escapes() {
		assert_eq!(
			parse_json_str(r#""he\b\f\n\r\tllo""#).unwrap(),
			v("he\x08\x0C\n\r\tllo")
		);
		assert_eq!(parse_json_str(r#""say \"hi\"""#).unwrap(), v("say \"hi\""));
		assert_eq!(parse_json_str(r#""heAllo""#).unwrap(), v("heAllo"));

		// invalid hex and unpaired surrogates are rejected
		assert!(parse_json_str(r#""he\u004Gllo""#).is_err());
		assert!(parse_json_str(r#""\uD834""#).is_err());
	}

	#[test]
	fn test_duplicate_keys_last_wins() {
		let json = parse_json_str(r#"{"a":1,"a":2}"#).unwrap();
		assert_eq!(json, v(vec![("a", 2)]));
	}

	#[test]
	fn test_missing_value_in_object() {
		let error = parse_json_str(r#"{"key":}"#).unwrap_err();
		assert_eq!(error.to_string(), "unexpected character '}' at position 7: {\"key\":");
	}

	#[test]
	fn test_unclosed_object() {
		let error = parse_json_str(r#"{"key": "value""#).unwrap_err();
		assert_eq!(
			error.to_string(),
			"unexpected end at position 15: {\"key\": \"value\"<EOF>"
		);
	}

	#[test]
	fn test_unclosed_array() {
		let error = parse_json_str(r#"["key", "value""#).unwrap_err();
		assert_eq!(
			error.to_string(),
			"unexpected end at position 15: [\"key\", \"value\"<EOF>"
		);
	}

	#[rstest]
	#[case("123..45")]
	#[case("1.2.3")]
	#[case("123e")]
	#[case("123e+")]
	#[case("-")]
	#[case("123.")]
	#[case("-0.")]
	fn test_invalid_numbers(#[case] input: &str) {
		assert!(parse_json_str(input).is_err(), "{input} should not parse");
	}

	#[test]
	fn test_invalid_tag() {
		let error = parse_json_str("nuul").unwrap_err();
		assert!(
			error.to_string().contains("unexpected character while parsing tag 'null'"),
			"{error}"
		);
	}

	#[test]
	fn test_empty_input() {
		let error = parse_json_str("").unwrap_err();
		assert_eq!(error.to_string(), "unexpected end at position 0: <EOF>");
	}

	#[test]
	fn test_trailing_input_is_rejected() {
		let error = parse_json_str("{} extra").unwrap_err();
		assert!(error.to_string().contains("unexpected trailing characters"), "{error}");

		// trailing whitespace is fine
		assert!(parse_json_str("{}  \n").is_ok());
	}

	#[test]
	fn test_missing_colon() {
		let error = parse_json_str(r#"{"key" "value"}"#).unwrap_err();
		assert!(error.to_string().starts_with("expected ':'"), "{error}");
	}
}
