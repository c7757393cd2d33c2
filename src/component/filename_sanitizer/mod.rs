//! 檔名清理元件
//!
//! 將工作副本中所有含空白的檔名與資料夾名稱改為底線

mod main;
mod whitespace_replacer;

pub use main::{FilenameSanitizer, RenamePlan, plan_renames, sanitize_tree};
pub use whitespace_replacer::{needs_sanitizing, replace_whitespace};
