use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 視為影片的路徑片段（大小寫敏感的子字串比對）
pub const VIDEO_MARKERS: [&str; 2] = [".mp4", ".mov"];

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

/// 建置設定
///
/// 所有欄位皆有預設值，`settings.json` 只需要寫入想覆寫的欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// 原始影片資料夾
    pub source_dir: PathBuf,
    /// 影片資料夾的工作副本（會被清理檔名）
    pub clone_dir: PathBuf,
    /// 縮圖輸出資料夾
    pub output_dir: PathBuf,
    pub frame_rate: u32,
    pub frame_count: u32,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./videos"),
            clone_dir: PathBuf::from("./build/videos-clone"),
            output_dir: PathBuf::from("./build/images"),
            frame_rate: 1,
            frame_count: 1,
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
        }
    }
}

impl BuildSettings {
    /// 檢查影格設定，0 會讓每支影片都在 ffmpeg 階段失敗
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            bail!("frame_rate 必須大於 0");
        }
        if self.frame_count == 0 {
            bail!("frame_count 必須大於 0");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: BuildSettings,
}
