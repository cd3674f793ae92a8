use std::env::consts::OS;
use std::path::{Path, PathBuf};

use crate::config::LibraryConfig;

pub fn create_library_name(pkg_name: &str) -> String {
    let lib_prefix = if OS == "windows" { "" } else { "lib" };

    let ext = match OS {
        "windows" => "dll",
        "macos" => "dylib",
        _ => "so",
    };

    format!("{}{}.{}", lib_prefix, pkg_name, ext)
}

pub fn resolve_library_path(library_dir: &Path, config: &LibraryConfig) -> PathBuf {
    config
        .path
        .clone()
        .unwrap_or_else(|| library_dir.join(create_library_name(&config.name)))
}
