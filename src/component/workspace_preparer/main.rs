use super::tree_copier::{CopySummary, copy_tree};
use crate::config::BuildSettings;
use crate::tools::{remove_directory_if_exists, validate_directory_exists};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// 工作區準備器
pub struct WorkspacePreparer {
    source_dir: PathBuf,
    clone_dir: PathBuf,
    output_dir: PathBuf,
}

impl WorkspacePreparer {
    #[must_use]
    pub fn new(settings: &BuildSettings) -> Self {
        Self {
            source_dir: settings.source_dir.clone(),
            clone_dir: settings.clone_dir.clone(),
            output_dir: settings.output_dir.clone(),
        }
    }

    /// 刪除舊的輸出與工作副本（不詢問），再把原始資料夾複製為工作副本
    ///
    /// 輸出資料夾不在這裡建立，由縮圖擷取時依需要建立
    pub fn run(&self) -> Result<CopySummary> {
        prepare_workspace(&self.source_dir, &self.output_dir, &self.clone_dir)
    }
}

pub fn prepare_workspace(
    source_dir: &Path,
    output_dir: &Path,
    clone_dir: &Path,
) -> Result<CopySummary> {
    validate_directory_exists(source_dir).context("找不到影片來源資料夾")?;

    remove_directory_if_exists(output_dir)?;
    remove_directory_if_exists(clone_dir)?;

    let summary = copy_tree(source_dir, clone_dir)?;
    info!(
        "已複製 {} -> {}（{} 個資料夾，{} 個檔案，{} 個連結）",
        source_dir.display(),
        clone_dir.display(),
        summary.directories,
        summary.files,
        summary.symlinks
    );

    Ok(summary)
}
