pub mod load;
pub mod types;

pub use types::{BuildSettings, Config, SETTINGS_FILE, VIDEO_MARKERS};
