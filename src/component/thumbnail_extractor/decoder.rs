use crate::tools::VideoProbe;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// 已開啟的影片
#[derive(Debug, Clone)]
pub struct VideoHandle {
    pub path: PathBuf,
    pub probe: Option<VideoProbe>,
}

impl VideoHandle {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            probe: None,
        }
    }

    /// 解碼器輸出檔名使用的基本名稱（去掉最後一個副檔名）
    #[must_use]
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map_or_else(|| "frame".to_string(), |s| s.to_string_lossy().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameExtractOptions {
    pub frame_rate: u32,
    pub frame_count: u32,
}

impl Default for FrameExtractOptions {
    fn default() -> Self {
        Self {
            frame_rate: 1,
            frame_count: 1,
        }
    }
}

/// 影片解碼器
///
/// 擷取的影格命名為 `<stem>_<n>.jpg`，`n` 從 1 開始
pub trait FrameDecoder: Sync {
    /// 開啟影片，無法讀取或解析時回傳錯誤
    fn open(&self, video_path: &Path) -> Result<VideoHandle>;

    /// 擷取影格到 `output_dir`（呼叫前已建立的空資料夾），回傳依序產生的檔案路徑
    fn extract_frames(
        &self,
        handle: &VideoHandle,
        output_dir: &Path,
        options: &FrameExtractOptions,
    ) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_stem() {
        assert_eq!(VideoHandle::new(Path::new("a/My_Clip.mp4")).stem(), "My_Clip");
        assert_eq!(VideoHandle::new(Path::new("a/b.mov.bak")).stem(), "b.mov");
    }
}
