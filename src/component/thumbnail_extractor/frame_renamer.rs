use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const FRAME_SUFFIX: &str = "_1.jpg";

/// 去掉解碼器加上的 `_1`：只處理結尾剛好是 `_1.jpg` 的檔名
#[must_use]
pub fn strip_frame_suffix(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(FRAME_SUFFIX)
        .map(|base| format!("{base}.jpg"))
}

/// 將產生的影格移到 `destination_dir` 並去掉 `_1`，回傳最終路徑
///
/// 不符合規則的檔名保持原樣。目標已存在時失敗，不覆寫其他影片的縮圖。
pub fn rename_produced_frame(frame_path: &Path, destination_dir: &Path) -> Result<PathBuf> {
    if !frame_path.is_file() {
        bail!("縮圖檔案未建立: {}", frame_path.display());
    }

    let Some(file_name) = frame_path.file_name().map(|n| n.to_string_lossy().to_string()) else {
        bail!("縮圖檔名無效: {}", frame_path.display());
    };
    let new_name = strip_frame_suffix(&file_name).unwrap_or(file_name);
    let new_path = destination_dir.join(new_name);
    if new_path == frame_path {
        return Ok(new_path);
    }

    // hard_link 在目標存在時必定失敗，檢查與建立之間沒有競爭
    match fs::hard_link(frame_path, &new_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("縮圖已存在，不覆寫: {}", new_path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "無法移動縮圖: {} -> {}",
                    frame_path.display(),
                    new_path.display()
                )
            });
        }
    }
    fs::remove_file(frame_path)
        .with_context(|| format!("無法刪除暫存影格: {}", frame_path.display()))?;
    debug!("縮圖改名 {} -> {}", frame_path.display(), new_path.display());

    Ok(new_path)
}
