use super::whitespace_replacer::{needs_sanitizing, replace_whitespace};
use crate::tools::{TreeEntry, scan_tree_entries};
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 單一重新命名動作（相對於根目錄）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
    pub is_dir: bool,
}

/// 檔名清理器
pub struct FilenameSanitizer {
    root: PathBuf,
}

impl FilenameSanitizer {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// 回傳實際重新命名的項目數
    pub fn run(&self) -> Result<usize> {
        sanitize_tree(&self.root)
    }
}

/// 由走訪順序的項目列表產生重新命名計畫
///
/// 只挑選最後一段名稱含空格的項目，並以走訪的反向順序排列。
/// 子項目一定排在父資料夾之前，所以改名時祖先路徑仍是原本的名稱。
#[must_use]
pub fn plan_renames(entries: &[TreeEntry]) -> Vec<RenamePlan> {
    entries
        .iter()
        .filter(|entry| needs_sanitizing(&entry.file_name()))
        .rev()
        .map(|entry| RenamePlan {
            from: entry.relative_path.clone(),
            to: entry
                .relative_path
                .with_file_name(replace_whitespace(&entry.file_name())),
            is_dir: entry.is_dir,
        })
        .collect()
}

/// 清理整個資料夾樹的檔名
///
/// 目標名稱已存在時直接失敗，不做任何覆寫
pub fn sanitize_tree(root: &Path) -> Result<usize> {
    let entries = scan_tree_entries(root)?;
    let plans = plan_renames(&entries);

    for plan in &plans {
        let from = root.join(&plan.from);
        let to = root.join(&plan.to);

        if to.symlink_metadata().is_ok() {
            bail!(
                "重新命名目標已存在: {} -> {}",
                from.display(),
                to.display()
            );
        }

        fs::rename(&from, &to)
            .with_context(|| format!("無法重新命名: {} -> {}", from.display(), to.display()))?;
        debug!(
            "重新命名{} {} -> {}",
            if plan.is_dir { "資料夾" } else { "檔案" },
            plan.from.display(),
            plan.to.display()
        );
    }

    Ok(plans.len())
}
