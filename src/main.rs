use anyhow::Result;
use console::style;
use log::{info, warn};
use video_thumbnail_builder::component::ThumbnailBuilder;
use video_thumbnail_builder::config::Config;
use video_thumbnail_builder::init;
use video_thumbnail_builder::log_step;
use video_thumbnail_builder::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new();
    info!("使用設定: {:?}", config.settings);

    let report = match ThumbnailBuilder::new(config, shutdown_signal).run() {
        Ok(report) => report,
        Err(e) => {
            warn!("Build failed: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!();
    println!("  已清理檔名: {} 個項目", report.renamed_entries);
    println!(
        "  縮圖: {} / {} 個影片",
        style(report.successful).green(),
        report.total_videos
    );
    if report.failed > 0 {
        println!("  失敗: {} 個", style(report.failed).red());
    }

    log_step("完成！");
    Ok(())
}
