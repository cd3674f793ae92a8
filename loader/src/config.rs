use serde::{Deserialize, Serialize};
use std::os::raw::c_int;
use std::path::PathBuf;

use dynlib::mode;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LoadFlag {
    Lazy,
    Now,
    Global,
    Local,
}

impl LoadFlag {
    pub fn bits(&self) -> c_int {
        match self {
            LoadFlag::Lazy => mode::RTLD_LAZY,
            LoadFlag::Now => mode::RTLD_NOW,
            LoadFlag::Global => mode::RTLD_GLOBAL,
            LoadFlag::Local => mode::RTLD_LOCAL,
        }
    }
}

pub fn mode_from_flags(flags: &[LoadFlag]) -> c_int {
    flags.iter().fold(0, |bits, flag| bits | flag.bits())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub name: String,
    pub path: Option<PathBuf>,
    pub mode: Option<Vec<LoadFlag>>,
    pub symbols: Option<Vec<String>>,
}

impl LibraryConfig {
    pub fn new(name: &str, path: Option<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            path,
            mode: None,
            symbols: None,
        }
    }
}

pub type LibraryConfigs = Vec<LibraryConfig>;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub libraries: LibraryConfigs,
}
