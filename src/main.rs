//! # figraster — 命令行入口
//!
//! 本文件仅负责日志初始化与错误退出码，业务逻辑见 `cli.rs`。

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = figure_raster::cli::run() {
        log::error!("导出失败: {err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
