pub mod component;
pub mod config;
pub mod init;
pub mod signal;
pub mod tools;

use console::style;
use log::debug;

/// 顯示流程步驟（綠色）
pub fn log_step(msg: &str) {
    println!("{}", style(msg).green());
    debug!("{msg}");
}

/// 顯示錯誤訊息（紅色粗體），不中斷流程
pub fn log_error(msg: &str) {
    eprintln!("{}", style(msg).red().bold());
    debug!("{msg}");
}
