//! Cross-platform handle for dynamic libraries loaded at runtime.

mod library;
mod os;

pub use library::DynamicLibrary;
pub use os::mode;
