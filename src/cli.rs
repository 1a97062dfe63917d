//! 命令行前端：把 EPS 文件走完整条导出流水线并写出图像。

use clap::Parser;
use std::path::PathBuf;

use crate::eps_figure::EpsFigure;
use crate::error::AppError;
use crate::figure_export::{FigureColor, FigureExporter, FigureHandle, RenderStrategy};
use crate::settings::load_export_config;
use crate::storage::save_raster;

#[derive(Parser, Debug)]
#[command(name = "figraster", version, about = "Rasterize an EPS figure with border normalization")]
pub struct Args {
    /// Input EPS file
    pub input: PathBuf,

    /// Output image (format chosen by extension)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Scale factor relative to 72 DPI
    #[arg(short = 's', long = "scale", default_value_t = 1.0)]
    pub scale: f64,

    /// Declared background: white, none, or r,g,b in [0, 1]
    #[arg(short = 'b', long = "background", default_value = "white")]
    pub background: String,

    /// Renderer argument (-painters / -opengl / -zbuffer)
    #[arg(short = 'r', long = "renderer", default_value = "painters", allow_hyphen_values = true)]
    pub renderer: String,

    /// Export config JSON file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<(), AppError> {
    let args = Args::parse();
    let config = load_export_config(args.config.as_deref())?;
    let strategy: RenderStrategy = args.renderer.parse()?;
    let color = parse_figure_color(&args.background)?;

    let figure = EpsFigure::open(&args.input, color)?;
    let exporter = FigureExporter::new(&figure, config)?;
    let output = exporter.export(FigureHandle(0), args.scale, strategy)?;

    if let Some(warning) = output.size_warning {
        eprintln!("warning: {warning}");
    }
    save_raster(output.raster, &args.output)
}

/// 解析 `--background`：`white` / `none` / `r,g,b`（各通道 0~1）。
pub fn parse_figure_color(value: &str) -> Result<FigureColor, AppError> {
    match value.trim().to_lowercase().as_str() {
        "none" => return Ok(FigureColor::None),
        "white" | "w" => return Ok(FigureColor::Rgb([1.0, 1.0, 1.0])),
        _ => {}
    }

    let channels: Vec<f64> = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| AppError::InvalidArgument(format!("背景色格式错误 '{}': {}", value, e)))?;

    let [r, g, b] = channels[..] else {
        return Err(AppError::InvalidArgument(format!(
            "背景色需要 3 个通道，当前：'{}'",
            value
        )));
    };
    if [r, g, b].iter().any(|c| !(0.0..=1.0).contains(c)) {
        return Err(AppError::InvalidArgument(format!(
            "背景色通道必须在 0~1 之间：'{}'",
            value
        )));
    }
    Ok(FigureColor::Rgb([r, g, b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_numeric_colors() {
        assert_eq!(parse_figure_color("none").ok(), Some(FigureColor::None));
        assert_eq!(parse_figure_color("White").ok(), Some(FigureColor::Rgb([1.0, 1.0, 1.0])));
        assert_eq!(
            parse_figure_color("0.5, 0.25,1").ok(),
            Some(FigureColor::Rgb([0.5, 0.25, 1.0]))
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        for value in ["red", "0.5,0.5", "0.1,0.2,1.5", "1,2,3,4"] {
            assert!(
                matches!(parse_figure_color(value), Err(AppError::InvalidArgument(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn args_accept_dashed_renderer() {
        let args = Args::try_parse_from(["figraster", "in.eps", "-o", "out.png", "-r", "-painters"])
            .expect("args should parse");
        assert_eq!(args.renderer, "-painters");
        assert_eq!(args.scale, 1.0);
        assert_eq!(args.background, "white");
    }
}
