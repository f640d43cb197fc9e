//! Test-only helpers for constructing entity lists and config files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::EntityNameList;
use crate::io::config::CONFIG_FILE_NAME;

/// Build an entity list from string literals.
pub fn entities(names: &[&str]) -> EntityNameList {
    EntityNameList::new(names.iter().copied())
}

/// Write `contents` as `stubgen.toml` under `dir` and return its path.
pub fn write_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, contents).expect("write config fixture");
    path
}

/// Fresh temp directory holding a `stubgen.toml` with `contents`.
pub fn temp_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_config_file(temp.path(), contents);
    (temp, path)
}
