#[cfg(feature = "audio")]
pub mod audio;
pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
