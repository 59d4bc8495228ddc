#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const BINARY_NAME: &str = "geotrace";

/// Path of a fixture file in the workspace `testdata/` directory.
pub fn testdata(filename: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("../testdata").join(filename)
}
