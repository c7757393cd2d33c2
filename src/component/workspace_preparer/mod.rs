//! 工作區準備元件
//!
//! 清除上一次的輸出，並複製一份原始影片資料夾作為工作副本

mod main;
mod tree_copier;

pub use main::{WorkspacePreparer, prepare_workspace};
pub use tree_copier::{CopySummary, copy_tree};
