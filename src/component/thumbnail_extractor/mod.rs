//! 縮圖擷取元件
//!
//! 對每支影片呼叫解碼器擷取一張 JPEG，並去掉解碼器加在檔名上的 `_1`

mod decoder;
mod ffmpeg_decoder;
mod frame_renamer;
mod main;

pub use decoder::{FrameDecoder, FrameExtractOptions, VideoHandle};
pub use ffmpeg_decoder::FfmpegDecoder;
pub use frame_renamer::{rename_produced_frame, strip_frame_suffix};
pub use main::{ExtractionOutcome, ExtractionTask, ThumbnailExtractor, create_extraction_tasks};
