use crate::component::filename_sanitizer::FilenameSanitizer;
use crate::component::thumbnail_extractor::{
    ExtractionOutcome, FfmpegDecoder, FrameDecoder, FrameExtractOptions, ThumbnailExtractor,
    create_extraction_tasks,
};
use crate::component::video_enumerator::VideoEnumerator;
use crate::component::workspace_preparer::WorkspacePreparer;
use crate::config::{BuildSettings, Config};
use crate::log_step;
use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 建置結果
#[derive(Debug, Default)]
pub struct BuildReport {
    pub total_videos: usize,
    pub renamed_entries: usize,
    pub successful: usize,
    pub failed: usize,
    pub outcomes: Vec<ExtractionOutcome>,
}

/// 縮圖建置器
///
/// 工作區準備或檔名清理失敗時整個流程中止；個別影片的失敗只記錄在結果中
pub struct ThumbnailBuilder<D: FrameDecoder> {
    settings: BuildSettings,
    decoder: D,
    shutdown_signal: Arc<AtomicBool>,
}

impl ThumbnailBuilder<FfmpegDecoder> {
    #[must_use]
    pub fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        let decoder = FfmpegDecoder::from_settings(&config.settings);
        Self::with_decoder(config, decoder, shutdown_signal)
    }
}

impl<D: FrameDecoder> ThumbnailBuilder<D> {
    pub fn with_decoder(config: Config, decoder: D, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            settings: config.settings,
            decoder,
            shutdown_signal,
        }
    }

    pub fn run(self) -> Result<BuildReport> {
        self.settings.validate()?;
        log_step("開始建置...");
        log_step("清除舊的建置並複製影片資料夾...");
        WorkspacePreparer::new(&self.settings).run()?;

        log_step("移除檔名中的空白...");
        let renamed_entries = FilenameSanitizer::new(&self.settings.clone_dir).run()?;
        info!("已重新命名 {renamed_entries} 個項目");

        log_step("尋找影片檔案...");
        let videos: Vec<PathBuf> = VideoEnumerator::new(&self.settings.clone_dir)
            .run()?
            .collect();
        info!("找到 {} 個影片", videos.len());

        log_step("產生縮圖...");
        let tasks =
            create_extraction_tasks(&videos, &self.settings.clone_dir, &self.settings.output_dir);
        let options = FrameExtractOptions {
            frame_rate: self.settings.frame_rate,
            frame_count: self.settings.frame_count,
        };
        let extractor = ThumbnailExtractor::new(self.decoder, options);
        let outcomes = extractor.extract_all(&tasks, &self.shutdown_signal);

        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，部分影片未處理");
        }

        let successful = outcomes.iter().filter(|o| o.success).count();
        Ok(BuildReport {
            total_videos: videos.len(),
            renamed_entries,
            successful,
            failed: outcomes.len() - successful,
            outcomes,
        })
    }
}
