// Utils compartidos

pub mod format;
pub mod files;

pub use format::*;
pub use files::file_handles;
