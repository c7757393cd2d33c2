use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// ffprobe 探測到的視訊串流資訊
#[derive(Debug, Clone, PartialEq)]
pub struct VideoProbe {
    pub codec_name: String,
    pub width: u32,
    pub height: u32,
    pub duration_seconds: Option<f64>,
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// 使用 ffprobe 確認檔案可被解碼並含有視訊串流
pub fn probe_video(ffprobe_path: &str, path: &Path) -> Result<VideoProbe> {
    if !path.is_file() {
        bail!("影片檔案不存在: {}", path.display());
    }

    let output = Command::new(ffprobe_path)
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .with_context(|| format!("無法執行 ffprobe: {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffprobe 無法開啟 {}: {}", path.display(), stderr.trim());
    }

    parse_probe_output(&String::from_utf8_lossy(&output.stdout), path)
}

fn parse_probe_output(json: &str, path: &Path) -> Result<VideoProbe> {
    let probe: FfprobeOutput =
        serde_json::from_str(json).with_context(|| "無法解析 ffprobe 輸出")?;

    let stream = probe
        .streams
        .unwrap_or_default()
        .into_iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| anyhow!("找不到視訊串流: {}", path.display()))?;

    let (Some(width), Some(height)) = (stream.width, stream.height) else {
        bail!("無法取得影片尺寸: {}", path.display());
    };

    let duration_seconds = probe
        .format
        .and_then(|f| f.duration)
        .and_then(|d| d.parse::<f64>().ok());

    Ok(VideoProbe {
        codec_name: stream.codec_name.unwrap_or_else(|| "unknown".to_string()),
        width,
        height,
        duration_seconds,
    })
}
