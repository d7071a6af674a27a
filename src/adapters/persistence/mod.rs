//! Filesystem adapters.

pub mod group_files;

pub use group_files::GroupFiles;
