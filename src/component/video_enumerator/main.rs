use crate::config::VIDEO_MARKERS;
use crate::tools::scan_tree_entries;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct VideoEnumerator {
    root: PathBuf,
}

impl VideoEnumerator {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn run(&self) -> Result<impl Iterator<Item = PathBuf> + use<>> {
        enumerate_videos(&self.root)
    }
}

/// 路徑字串中任何位置包含 `.mp4` 或 `.mov` 即視為影片
///
/// 比對整個相對路徑而非副檔名，`b.mov.bak` 或 `clips.mp4/` 底下的項目也會被選中。
/// 資料夾不會因型別被排除。
#[must_use]
pub fn is_video_path(path: &Path) -> bool {
    let path = path.to_string_lossy();
    VIDEO_MARKERS.iter().any(|marker| path.contains(marker))
}

pub fn select_videos<I, P>(paths: I) -> impl Iterator<Item = PathBuf>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(Into::<PathBuf>::into)
        .filter(|path| is_video_path(path))
}

/// 列出根目錄下所有影片的相對路徑，依走訪順序
pub fn enumerate_videos(root: &Path) -> Result<impl Iterator<Item = PathBuf> + use<>> {
    let paths: Vec<PathBuf> = scan_tree_entries(root)?
        .into_iter()
        .map(|entry| entry.relative_path)
        .collect();
    Ok(select_videos(paths))
}
