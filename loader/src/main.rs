mod config;
mod helper;

use clap::Parser;
use config::{mode_from_flags, LibraryConfig, LibraryConfigs, LoaderConfig};
use dynlib::DynamicLibrary;
use helper::resolve_library_path;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about = "Config-driven dynamic library loader")]
struct Args {
    /// YAML file listing the libraries to load.
    config: PathBuf,

    /// Directory searched for libraries referenced by name only.
    #[arg(short, long, default_value = "plugins")]
    library_dir: PathBuf,
}

struct LoadedLibrary {
    name: String,
    library: DynamicLibrary,
}

fn load_libraries(library_dir: &Path, configs: LibraryConfigs) -> Vec<LoadedLibrary> {
    info!("Load libraries...");
    let mut libraries: Vec<LoadedLibrary> = Vec::new();

    for libconfig in configs {
        if libraries.iter().any(|lib| lib.name == libconfig.name) {
            warn!("Library '{}' already loaded. Skip loading.", libconfig.name);
            continue;
        }

        let path = resolve_library_path(library_dir, &libconfig);
        info!("Loading library: {} ({})", libconfig.name, path.display());

        let result = match &libconfig.mode {
            Some(flags) => DynamicLibrary::load_with_mode(&path, mode_from_flags(flags)),
            None => DynamicLibrary::load(&path),
        };

        match result {
            Ok(library) => {
                resolve_symbols(&library, &libconfig);
                libraries.push(LoadedLibrary {
                    name: libconfig.name,
                    library,
                });
            }
            Err(e) => {
                warn!("Failed loading library '{}'. Reason: {}", libconfig.name, e);
            }
        }
    }
    libraries
}

fn resolve_symbols(library: &DynamicLibrary, config: &LibraryConfig) {
    for symbol in config.symbols.iter().flatten() {
        match library.get_symbol(symbol) {
            Some(address) => {
                info!("Resolved symbol '{}' at {:p}", symbol, address);
            }
            None => {
                warn!("Symbol '{}' not found in '{}'", symbol, config.name);
            }
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();

    info!("Starting loader with config: {}", args.config.display());

    let config_str = std::fs::read_to_string(&args.config).map_err(|e| {
        format!(
            "Failed to read config file: {}. Reason: {}",
            args.config.display(),
            e
        )
    })?;

    let config: LoaderConfig = serde_yml::from_str(&config_str)
        .map_err(|e| format!("Failed to parse config. Reason: {}", e))?;

    let configured = config.libraries.len();
    let libraries = load_libraries(&args.library_dir, config.libraries);

    for lib in &libraries {
        info!(
            "Library '{}' loaded from {}",
            lib.name,
            lib.library.path().display()
        );
    }
    info!("Loaded {} of {} libraries", libraries.len(), configured);

    Ok(())
}
