use super::JsonValue;

/// Serialize a value to a compact JSON string.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(text) => format!("\"{}\"", escape_json_string(text)),
		JsonValue::Number(number) => number.to_string(),
		JsonValue::Boolean(boolean) => boolean.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Object(object) => object.stringify(),
	}
}

/// Serialize a value to a two-space indented, multi-line JSON string.
///
/// Empty containers stay on one line as `{}` / `[]`.
pub fn stringify_pretty(json: &JsonValue) -> String {
	pretty_value(json, 0)
}

fn pretty_value(json: &JsonValue, depth: usize) -> String {
	let indent = "  ".repeat(depth + 1);
	match json {
		JsonValue::Array(array) if !array.is_empty() => {
			let items = array
				.iter()
				.map(|value| format!("{indent}{}", pretty_value(value, depth + 1)))
				.collect::<Vec<_>>();
			format!("[\n{}\n{}]", items.join(",\n"), "  ".repeat(depth))
		}
		JsonValue::Object(object) if !object.is_empty() => {
			let items = object
				.iter()
				.map(|(key, value)| {
					format!(
						"{indent}\"{}\": {}",
						escape_json_string(key),
						pretty_value(value, depth + 1)
					)
				})
				.collect::<Vec<_>>();
			format!("{{\n{}\n{}}}", items.join(",\n"), "  ".repeat(depth))
		}
		_ => stringify(json),
	}
}

/// Escape a string for embedding in JSON output.
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;

	#[test]
	fn test_stringify_primitives() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("\"Hello, World!\"")?), "\"Hello, World!\"");
		assert_eq!(stringify(&parse_json_str("42")?), "42");
		assert_eq!(stringify(&parse_json_str("23.5")?), "23.5");
		assert_eq!(stringify(&parse_json_str("true")?), "true");
		assert_eq!(stringify(&parse_json_str("null")?), "null");
		Ok(())
	}

	#[test]
	fn test_stringify_special_characters() -> Result<()> {
		let json = parse_json_str("\"Line1\\nLine2\\tTab\\\\\"")?;
		assert_eq!(stringify(&json), "\"Line1\\nLine2\\tTab\\\\\"");

		let json = parse_json_str("\"Hello \\\"World\\\"\"")?;
		assert_eq!(stringify(&json), "\"Hello \\\"World\\\"\"");
		Ok(())
	}

	#[test]
	fn test_stringify_nested() -> Result<()> {
		let json = parse_json_str("{\"nested\": {\"array\": [\"value\", {\"inner\": 3.14}], \"boolean\": true}}")?;
		assert_eq!(
			stringify(&json),
			"{\"nested\":{\"array\":[\"value\",{\"inner\":3.14}],\"boolean\":true}}"
		);
		Ok(())
	}

	#[test]
	fn test_escape_control_characters() {
		assert_eq!(escape_json_string("a\x01b"), "a\\u0001b");
	}

	#[test]
	fn test_pretty_empty_containers() -> Result<()> {
		assert_eq!(stringify_pretty(&parse_json_str("{}")?), "{}");
		assert_eq!(stringify_pretty(&parse_json_str("[]")?), "[]");
		Ok(())
	}

	#[test]
	fn test_pretty_object() -> Result<()> {
		let json = parse_json_str(r#"{"a":1,"b":[true,null]}"#)?;
		let expected = "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}";
		assert_eq!(stringify_pretty(&json), expected);
		Ok(())
	}

	#[test]
	fn test_pretty_roundtrips() -> Result<()> {
		let json = parse_json_str(r#"{"a":{"b":[1,2,{"c":"d"}]},"e":null}"#)?;
		assert_eq!(parse_json_str(&stringify_pretty(&json))?, json);
		Ok(())
	}
}
