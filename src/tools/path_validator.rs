use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

/// 強制刪除資料夾（若存在）
pub fn remove_directory_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        debug!("刪除舊資料夾: {}", path.display());
        std::fs::remove_dir_all(path)
            .with_context(|| format!("無法刪除資料夾: {}", path.display()))?;
    }
    Ok(())
}
