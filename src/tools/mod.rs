mod ffprobe_info;
mod file_scanner;
mod path_validator;

pub use ffprobe_info::{VideoProbe, probe_video};
pub use file_scanner::{TreeEntry, scan_tree_entries};
pub use path_validator::{
    ensure_directory_exists, remove_directory_if_exists, validate_directory_exists,
};
