//! 功能元件模組
//!
//! 每個子模組實現縮圖建置流程中的一個階段

pub mod filename_sanitizer;
pub mod thumbnail_builder;
pub mod thumbnail_extractor;
pub mod video_enumerator;
pub mod workspace_preparer;

pub use filename_sanitizer::FilenameSanitizer;
pub use thumbnail_builder::{BuildReport, ThumbnailBuilder};
pub use thumbnail_extractor::{FfmpegDecoder, ThumbnailExtractor};
pub use video_enumerator::VideoEnumerator;
pub use workspace_preparer::WorkspacePreparer;
