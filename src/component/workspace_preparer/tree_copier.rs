use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 複製結果統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
}

/// 遞迴複製整個資料夾（含空資料夾）
///
/// 符號連結以連結本身複製，不跟隨（指向不存在目標的連結也照樣複製）。
/// 中途失敗時不會回復已複製的內容。
pub fn copy_tree(source: &Path, destination: &Path) -> Result<CopySummary> {
    let mut summary = CopySummary::default();

    for entry in WalkDir::new(source).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("無法讀取來源資料夾: {}", source.display()))?;
        let relative = entry.path().strip_prefix(source)?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("無法建立資料夾: {}", target.display()))?;
            summary.directories += 1;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            debug!("複製連結 {}", relative.display());
            summary.symlinks += 1;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "無法複製檔案: {} -> {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            debug!("複製 {}", relative.display());
            summary.files += 1;
        }
    }

    Ok(summary)
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let points_to =
        fs::read_link(link).with_context(|| format!("無法讀取連結: {}", link.display()))?;
    std::os::unix::fs::symlink(&points_to, target)
        .with_context(|| format!("無法建立連結: {}", target.display()))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    fs::copy(link, target)
        .map(|_| ())
        .with_context(|| format!("無法複製連結: {}", link.display()))
}
