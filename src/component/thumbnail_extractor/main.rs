use super::decoder::{FrameDecoder, FrameExtractOptions, VideoHandle};
use super::frame_renamer::rename_produced_frame;
use crate::log_error;
use crate::tools::{ensure_directory_exists, remove_directory_if_exists};
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一影片的縮圖擷取任務
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTask {
    /// 相對於工作副本根目錄的影片路徑
    pub video: PathBuf,
    pub source_path: PathBuf,
    /// 輸出根目錄下對應的子資料夾
    pub output_dir: PathBuf,
    /// 同一批次內唯一，用來命名暫存資料夾
    pub index: usize,
}

impl ExtractionTask {
    /// 解碼器輸出用的暫存資料夾，每個任務各自一個
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.output_dir.join(format!(".frames-{}", self.index))
    }
}

/// 縮圖擷取結果
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub video: PathBuf,
    pub thumbnail_path: Option<PathBuf>,
    pub success: bool,
    pub error_message: Option<String>,
}

/// 建立擷取任務列表，保持影片的列舉順序
#[must_use]
pub fn create_extraction_tasks(
    videos: &[PathBuf],
    clone_root: &Path,
    output_root: &Path,
) -> Vec<ExtractionTask> {
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| ExtractionTask {
            video: video.clone(),
            source_path: clone_root.join(video),
            output_dir: video
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or_else(|| output_root.to_path_buf(), |dir| output_root.join(dir)),
            index,
        })
        .collect()
}

/// 縮圖擷取器
///
/// 每支影片只擷取一張影格，失敗的影片會被記錄後略過，不影響其他影片
pub struct ThumbnailExtractor<D: FrameDecoder> {
    decoder: D,
    options: FrameExtractOptions,
}

impl<D: FrameDecoder> ThumbnailExtractor<D> {
    pub const fn new(decoder: D, options: FrameExtractOptions) -> Self {
        Self { decoder, options }
    }

    #[must_use]
    pub fn extract(&self, task: &ExtractionTask) -> ExtractionOutcome {
        match self.extract_inner(task) {
            Ok(thumbnail_path) => ExtractionOutcome {
                video: task.video.clone(),
                thumbnail_path: Some(thumbnail_path),
                success: true,
                error_message: None,
            },
            Err(e) => ExtractionOutcome {
                video: task.video.clone(),
                thumbnail_path: None,
                success: false,
                error_message: Some(format!("{e:#}")),
            },
        }
    }

    fn extract_inner(&self, task: &ExtractionTask) -> Result<PathBuf> {
        let handle = self
            .decoder
            .open(&task.source_path)
            .with_context(|| format!("無法開啟影片: {}", task.video.display()))?;

        ensure_directory_exists(&task.output_dir)?;

        // 解碼器先寫到獨立的暫存資料夾，避免同資料夾的影片互相覆寫輸出
        let scratch_dir = task.scratch_dir();
        remove_directory_if_exists(&scratch_dir)?;
        ensure_directory_exists(&scratch_dir)?;

        let result = self.extract_into(&handle, task, &scratch_dir);

        if let Err(e) = remove_directory_if_exists(&scratch_dir) {
            warn!("{e:#}");
        }
        result
    }

    fn extract_into(
        &self,
        handle: &VideoHandle,
        task: &ExtractionTask,
        scratch_dir: &Path,
    ) -> Result<PathBuf> {
        let produced = self
            .decoder
            .extract_frames(handle, scratch_dir, &self.options)
            .with_context(|| format!("無法擷取影格: {}", task.video.display()))?;

        // 解碼器的最後一個輸出才是要保留的縮圖
        let last = produced
            .last()
            .ok_or_else(|| anyhow!("解碼器沒有產生任何影格: {}", task.video.display()))?;
        debug!("擷取完成 [{}] {}", task.index, last.display());

        rename_produced_frame(last, &task.output_dir)
            .with_context(|| format!("無法儲存縮圖: {}", task.video.display()))
    }

    /// 平行擷取所有影片的縮圖，等待全部完成後回傳（順序與任務相同）
    ///
    /// 收到中斷訊號後，尚未開始的任務會標記為已取消
    pub fn extract_all(
        &self,
        tasks: &[ExtractionTask],
        shutdown_signal: &Arc<AtomicBool>,
    ) -> Vec<ExtractionOutcome> {
        tasks
            .par_iter()
            .map(|task| {
                if shutdown_signal.load(Ordering::SeqCst) {
                    return ExtractionOutcome {
                        video: task.video.clone(),
                        thumbnail_path: None,
                                success: false,
                        error_message: Some("操作已取消".to_string()),
                    };
                }

                let outcome = self.extract(task);

                match (&outcome.thumbnail_path, &outcome.error_message) {
                    (Some(path), _) => info!("已產生縮圖: {}", path.display()),
                    (None, Some(msg)) => log_error(&format!("Error: {msg}")),
                    (None, None) => {}
                }

                outcome
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::fs;
    use tempfile::TempDir;

    /// 模擬解碼器：檔名含 `broken` 時開啟失敗，含 `empty` 時不輸出任何影格，
    /// 其他情況寫出內容為 stem 的影格（和 ffmpeg `-y` 一樣會覆寫）
    struct StubDecoder;

    impl FrameDecoder for StubDecoder {
        fn open(&self, video_path: &Path) -> Result<VideoHandle> {
            if video_path.to_string_lossy().contains("broken") {
                bail!("invalid data found when processing input");
            }
            Ok(VideoHandle::new(video_path))
        }

        fn extract_frames(
            &self,
            handle: &VideoHandle,
            output_dir: &Path,
            options: &FrameExtractOptions,
        ) -> Result<Vec<PathBuf>> {
            if handle.path.to_string_lossy().contains("empty") {
                return Ok(Vec::new());
            }
            let stem = handle.stem();
            (1..=options.frame_count)
                .map(|i| -> Result<PathBuf> {
                    let path = output_dir.join(format!("{stem}_{i}.jpg"));
                    fs::write(&path, &stem)?;
                    Ok(path)
                })
                .collect()
        }
    }

    #[test]
    fn test_create_extraction_tasks() {
        let videos = vec![PathBuf::from("top.mp4"), PathBuf::from("trip/day1/a.mov")];
        let tasks = create_extraction_tasks(&videos, Path::new("/clone"), Path::new("/images"));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].source_path, PathBuf::from("/clone/top.mp4"));
        assert_eq!(tasks[0].output_dir, PathBuf::from("/images"));
        assert_eq!(tasks[1].source_path, PathBuf::from("/clone/trip/day1/a.mov"));
        assert_eq!(tasks[1].output_dir, PathBuf::from("/images/trip/day1"));
        assert_eq!(tasks[1].index, 1);
    }

    #[test]
    fn test_extract_creates_mirrored_thumbnail() {
        let temp_dir = TempDir::new().unwrap();
        let output_root = temp_dir.path().join("images");
        let videos = vec![PathBuf::from("trip/My_Clip.mp4")];
        let tasks = create_extraction_tasks(&videos, Path::new("/clone"), &output_root);

        let extractor = ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default());
        let outcome = extractor.extract(&tasks[0]);

        assert!(outcome.success, "{:?}", outcome.error_message);
        let expected = output_root.join("trip/My_Clip.jpg");
        assert_eq!(outcome.thumbnail_path.as_deref(), Some(expected.as_path()));
        assert!(expected.is_file());
        assert!(!output_root.join("trip/My_Clip_1.jpg").exists());
    }

    #[test]
    fn test_extract_keeps_last_frame_name_when_multiple() {
        let temp_dir = TempDir::new().unwrap();
        let tasks =
            create_extraction_tasks(&[PathBuf::from("a.mp4")], Path::new("/clone"), temp_dir.path());
        let options = FrameExtractOptions {
            frame_rate: 1,
            frame_count: 3,
        };

        let outcome = ThumbnailExtractor::new(StubDecoder, options).extract(&tasks[0]);

        assert!(outcome.success);
        assert_eq!(outcome.thumbnail_path, Some(temp_dir.path().join("a_3.jpg")));
        assert!(!temp_dir.path().join("a_1.jpg").exists());
        assert!(!tasks[0].scratch_dir().exists());
    }

    #[test]
    fn test_extract_open_failure_does_not_create_output() {
        let temp_dir = TempDir::new().unwrap();
        let output_root = temp_dir.path().join("images");
        let tasks = create_extraction_tasks(
            &[PathBuf::from("sub/broken.mp4")],
            Path::new("/clone"),
            &output_root,
        );

        let outcome =
            ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default()).extract(&tasks[0]);

        assert!(!outcome.success);
        assert!(outcome.error_message.unwrap().contains("invalid data"));
        assert!(!output_root.exists());
    }

    #[test]
    fn test_extract_without_frames_fails() {
        let temp_dir = TempDir::new().unwrap();
        let tasks = create_extraction_tasks(
            &[PathBuf::from("empty.mov")],
            Path::new("/clone"),
            temp_dir.path(),
        );

        let outcome =
            ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default()).extract(&tasks[0]);

        assert!(!outcome.success);
        assert!(outcome.error_message.unwrap().contains("沒有產生任何影格"));
    }

    #[test]
    fn test_extract_all_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let videos = vec![
            PathBuf::from("a.mp4"),
            PathBuf::from("broken.mp4"),
            PathBuf::from("c.mov"),
        ];
        let tasks = create_extraction_tasks(&videos, Path::new("/clone"), temp_dir.path());
        let shutdown_signal = Arc::new(AtomicBool::new(false));

        let outcomes = ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default())
            .extract_all(&tasks, &shutdown_signal);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[2].success);
        assert!(temp_dir.path().join("a.jpg").is_file());
        assert!(temp_dir.path().join("c.jpg").is_file());
    }

    #[test]
    fn test_extract_all_after_shutdown() {
        let temp_dir = TempDir::new().unwrap();
        let tasks =
            create_extraction_tasks(&[PathBuf::from("a.mp4")], Path::new("/clone"), temp_dir.path());
        let shutdown_signal = Arc::new(AtomicBool::new(true));

        let outcomes = ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default())
            .extract_all(&tasks, &shutdown_signal);

        assert!(!outcomes[0].success);
        assert_eq!(outcomes[0].error_message.as_deref(), Some("操作已取消"));
        assert!(!temp_dir.path().join("a.jpg").exists());
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_extract_all_sibling_with_frame_suffix_name() {
        let temp_dir = TempDir::new().unwrap();
        let videos = vec![PathBuf::from("Clip.mp4"), PathBuf::from("Clip_1.mp4")];
        let tasks = create_extraction_tasks(&videos, Path::new("/clone"), temp_dir.path());
        let shutdown_signal = Arc::new(AtomicBool::new(false));

        let outcomes = ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default())
            .extract_all(&tasks, &shutdown_signal);

        assert!(outcomes.iter().all(|o| o.success), "{outcomes:?}");
        assert_eq!(file_names(temp_dir.path()), vec!["Clip.jpg", "Clip_1.jpg"]);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Clip.jpg")).unwrap(),
            "Clip"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Clip_1.jpg")).unwrap(),
            "Clip_1"
        );
    }

    #[test]
    fn test_extract_all_same_stem_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let videos = vec![PathBuf::from("a.mov"), PathBuf::from("a.mp4")];
        let tasks = create_extraction_tasks(&videos, Path::new("/clone"), temp_dir.path());
        let shutdown_signal = Arc::new(AtomicBool::new(false));

        let outcomes = ThumbnailExtractor::new(StubDecoder, FrameExtractOptions::default())
            .extract_all(&tasks, &shutdown_signal);

        assert_eq!(outcomes.iter().filter(|o| o.success).count(), 1);
        let failure = outcomes.iter().find(|o| !o.success).unwrap();
        assert!(
            failure
                .error_message
                .as_deref()
                .unwrap()
                .contains("縮圖已存在")
        );
        assert_eq!(file_names(temp_dir.path()), vec!["a.jpg"]);
    }
}
