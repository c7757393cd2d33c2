use super::decoder::{FrameDecoder, FrameExtractOptions, VideoHandle};
use crate::config::BuildSettings;
use crate::tools::probe_video;
use anyhow::{Context, Result, bail};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 以外部 ffmpeg / ffprobe 執行檔實作的解碼器
#[derive(Debug, Clone)]
pub struct FfmpegDecoder {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl Default for FfmpegDecoder {
    fn default() -> Self {
        Self::from_settings(&BuildSettings::default())
    }
}

impl FfmpegDecoder {
    #[must_use]
    pub fn from_settings(settings: &BuildSettings) -> Self {
        Self {
            ffmpeg_path: settings.ffmpeg_path.clone(),
            ffprobe_path: settings.ffprobe_path.clone(),
        }
    }

    /// 輸出檔名樣式 `<stem>_%d.jpg`，檔名中的 `%` 需跳脫
    fn output_pattern(handle: &VideoHandle, output_dir: &Path) -> PathBuf {
        let stem = handle.stem().replace('%', "%%");
        output_dir.join(format!("{stem}_%d.jpg"))
    }

    #[must_use]
    pub fn build_command(
        &self,
        handle: &VideoHandle,
        output_dir: &Path,
        options: &FrameExtractOptions,
    ) -> Command {
        // 加上 file: 前綴，避免檔名中的冒號被當成協定
        let mut input = OsString::from("file:");
        input.push(&handle.path);

        let frame_rate = options.frame_rate.to_string();
        let frame_count = options.frame_count.to_string();

        let mut cmd = Command::new(&self.ffmpeg_path);
        cmd.args(["-hide_banner", "-nostdin", "-loglevel", "error", "-i"]);
        cmd.arg(input);
        cmd.args([
            "-an",
            "-sn",
            "-dn",
            "-r",
            frame_rate.as_str(),
            "-frames:v",
            frame_count.as_str(),
            "-q:v",
            "2",
            "-n",
        ]);
        cmd.arg(Self::output_pattern(handle, output_dir));
        cmd
    }
}

impl FrameDecoder for FfmpegDecoder {
    fn open(&self, video_path: &Path) -> Result<VideoHandle> {
        let probe = probe_video(&self.ffprobe_path, video_path)?;
        debug!(
            "開啟影片 {}: {} {}x{} ({})",
            video_path.display(),
            probe.codec_name,
            probe.width,
            probe.height,
            probe
                .duration_seconds
                .map_or_else(|| "長度未知".to_string(), |d| format!("{d:.2}s"))
        );

        Ok(VideoHandle {
            path: video_path.to_path_buf(),
            probe: Some(probe),
        })
    }

    fn extract_frames(
        &self,
        handle: &VideoHandle,
        output_dir: &Path,
        options: &FrameExtractOptions,
    ) -> Result<Vec<PathBuf>> {
        let mut cmd = self.build_command(handle, output_dir, options);
        debug!("執行 {cmd:?}");

        let output = cmd
            .output()
            .with_context(|| format!("無法執行 ffmpeg 擷取影格: {}", handle.path.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("ffmpeg 擷取影格失敗: {}", stderr.trim());
        }

        let stem = handle.stem();
        let produced: Vec<PathBuf> = (1..=options.frame_count)
            .map(|index| output_dir.join(format!("{stem}_{index}.jpg")))
            .filter(|path| path.is_file())
            .collect();

        if produced.is_empty() {
            bail!("ffmpeg 沒有輸出任何影格: {}", handle.path.display());
        }

        Ok(produced)
    }
}
