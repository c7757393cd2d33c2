//! 影片列舉元件

mod main;

pub use main::{VideoEnumerator, enumerate_videos, is_video_path, select_videos};
