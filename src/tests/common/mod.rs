// tests/common/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::parser::FlatConfig;

/// Drop a fixture file into `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// A flat config carrying all required keys.
pub fn base_flat() -> FlatConfig {
    let mut flat = FlatConfig::new();
    flat.insert("title".into(), "My Games".into());
    flat.insert("bgg_username".into(), "alice".into());
    flat.insert("github_repo".into(), "alice/gamecache".into());
    flat
}
