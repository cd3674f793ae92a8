use std::os::raw::{c_int, c_void};
use std::path::{Path, PathBuf};

use libloading::Library;
use log::trace;

use crate::os::{self, mode};

/// An exclusively owned handle to a dynamic library loaded into this
/// process. The underlying OS handle is released exactly once, when the
/// value is dropped; the result of the close call is discarded.
///
/// Loading the same path from several threads at once is coordinated by
/// the host loader alone, not by this type.
#[derive(Debug)]
pub struct DynamicLibrary {
    library: Library,
    path: PathBuf,
}

impl DynamicLibrary {
    /// Loads the library at `path` with [`mode::DEFAULT`].
    pub fn load(path: &Path) -> Result<Self, String> {
        Self::load_with_mode(path, mode::DEFAULT)
    }

    /// Loads the library at `path` with an explicit set of mode flags.
    /// Windows has no mode concept and ignores `mode`.
    ///
    /// No existence check runs before the OS call: a missing or malformed
    /// file is reported by the host loader, whose diagnostic text ends up
    /// in the returned error string together with the attempted path.
    pub fn load_with_mode(path: &Path, mode: c_int) -> Result<Self, String> {
        if path.as_os_str().is_empty() {
            return Err("Empty path.".to_string());
        }

        let library = os::open(path, mode)
            .map_err(|e| format!("Failed to load \"{}\". Reason: {}", path.display(), e))?;
        trace!("Loaded library: {}", path.display());

        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Resolves `name` to a raw address in this library. Returns `None`
    /// when the symbol is absent; unlike [`DynamicLibrary::load`] there is
    /// no diagnostic for this failure path.
    pub fn get_symbol(&self, name: &str) -> Option<*mut c_void> {
        unsafe {
            self.library
                .get::<*mut c_void>(name.as_bytes())
                .ok()
                .and_then(|symbol| symbol.try_as_raw_ptr())
        }
    }

    /// The path this library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DynamicLibrary {
    fn drop(&mut self) {
        trace!("Unloading library: {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[serial]
    #[test_log::test]
    fn test_load_empty_path() {
        let result = DynamicLibrary::load(Path::new(""));
        assert_eq!(result.unwrap_err(), "Empty path.");
    }

    #[serial]
    #[test_log::test]
    fn test_load_missing_file() {
        let error = DynamicLibrary::load(Path::new("non_existent_path")).unwrap_err();
        assert!(error.contains("non_existent_path"));
    }

    #[serial]
    #[test_log::test]
    fn test_load_missing_file_with_mode() {
        let result = DynamicLibrary::load_with_mode(
            Path::new("non_existent_path"),
            mode::RTLD_NOW | mode::RTLD_LOCAL,
        );
        assert!(result.is_err());
    }
}
