//! Default implementations of the interface traits

pub mod memory_file_probe;
pub mod os_file_probe;

pub use memory_file_probe::MemoryFileProbe;
pub use os_file_probe::OsFileProbe;
