use std::os::raw::c_int;
use std::path::Path;

use libloading::Library;

/// Load-mode flags passed through to the host loader.
pub mod mode {
    use std::os::raw::c_int;

    #[cfg(unix)]
    pub use libloading::os::unix::{RTLD_GLOBAL, RTLD_LAZY, RTLD_LOCAL, RTLD_NOW};

    // Windows has no load-mode concept. The flags exist so callers compile
    // unchanged and are ignored by the Windows loader arm.
    #[cfg(windows)]
    pub const RTLD_LAZY: c_int = 0;
    #[cfg(windows)]
    pub const RTLD_NOW: c_int = 0;
    #[cfg(windows)]
    pub const RTLD_GLOBAL: c_int = 0;
    #[cfg(windows)]
    pub const RTLD_LOCAL: c_int = 0;

    /// Symbols visible to later loads, resolved lazily.
    pub const DEFAULT: c_int = RTLD_GLOBAL | RTLD_LAZY;
}

#[cfg(unix)]
pub(crate) fn open(path: &Path, mode: c_int) -> Result<Library, libloading::Error> {
    use libloading::os::unix;

    unsafe { unix::Library::open(Some(path), mode).map(Library::from) }
}

#[cfg(windows)]
pub(crate) fn open(path: &Path, _mode: c_int) -> Result<Library, libloading::Error> {
    use libloading::os::windows;

    unsafe { windows::Library::new(path).map(Library::from) }
}
