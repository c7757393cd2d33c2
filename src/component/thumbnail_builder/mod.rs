//! 縮圖建置流程
//!
//! 四階段流程：
//! A. 準備工作區（清除舊輸出、複製影片資料夾）
//! B. 清理檔名中的空白
//! C. 列舉影片
//! D. 擷取縮圖

mod main;

pub use main::{BuildReport, ThumbnailBuilder};
