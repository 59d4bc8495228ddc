mod parse;
mod stringify;
mod types;

pub use parse::parse_json_str;
pub use stringify::{escape_json_string, stringify, stringify_pretty};
pub use types::{JsonArray, JsonObject, JsonValue};
