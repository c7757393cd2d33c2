use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 相對於掃描根目錄的項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub relative_path: PathBuf,
    pub is_dir: bool,
}

impl TreeEntry {
    /// 最後一段路徑名稱
    #[must_use]
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// 遞迴列出根目錄下所有檔案與資料夾（不含根目錄本身）
///
/// 順序為走訪順序：資料夾一定排在其內容之前，同層依名稱排序
pub fn scan_tree_entries(root: &Path) -> Result<Vec<TreeEntry>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| -> Result<TreeEntry> {
            let entry = entry.with_context(|| format!("無法走訪資料夾: {}", root.display()))?;
            let relative_path = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("路徑不在根目錄下: {}", entry.path().display()))?
                .to_path_buf();
            Ok(TreeEntry {
                relative_path,
                is_dir: entry.file_type().is_dir(),
            })
        })
        .collect()
}
