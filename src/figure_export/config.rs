//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ExportConfig`：外部工具路径、临时目录、屏幕 DPI 覆盖、
//! 超大输出提示阈值以及快速捕获开关。
//!
//! ## 实现思路
//!
//! - `Default` 提供开箱可用的配置（`gs` 从 PATH 查找、系统临时目录）。
//! - `#[serde(default)]` 允许 JSON 配置文件只写需要覆盖的字段。
//! - `validate` 在每次导出前执行，尽早拒绝不合理参数。

use serde::Deserialize;
use std::path::PathBuf;

use super::ExportError;

/// 超过该像素数时给出“慢且占内存”的提示。
pub const DEFAULT_LARGE_OUTPUT_PIXELS: u64 = 30_000_000;

/// 图像导出配置。
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Ghostscript 可执行文件路径，未设置时按平台默认名从 PATH 查找。
    pub ghostscript_path: Option<PathBuf>,
    /// 传给 Ghostscript 的字体目录（`-sFONTPATH`）。
    pub font_path: Option<PathBuf>,
    /// 中间文件目录，未设置时使用系统临时目录。
    pub temp_dir: Option<PathBuf>,
    /// 覆盖宿主报告的屏幕 DPI。
    pub screen_dpi_override: Option<f64>,
    /// 预计输出像素上限（仅提示，不拒绝）。
    pub large_output_pixel_threshold: u64,
    /// 直接捕获策略是否先尝试内存快速捕获。
    pub enable_fast_capture: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            ghostscript_path: None,
            font_path: None,
            temp_dir: None,
            screen_dpi_override: None,
            large_output_pixel_threshold: DEFAULT_LARGE_OUTPUT_PIXELS,
            enable_fast_capture: true,
        }
    }
}

impl ExportConfig {
    /// 中间文件实际使用的目录。
    pub(crate) fn resolved_temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if let Some(dpi) = self.screen_dpi_override {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(ExportError::InvalidRequest(format!(
                    "screen_dpi_override 必须为正数，当前：{}",
                    dpi
                )));
            }
        }
        if self.large_output_pixel_threshold == 0 {
            return Err(ExportError::InvalidRequest(
                "large_output_pixel_threshold 不能为 0".to_string(),
            ));
        }
        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(ExportError::InvalidRequest(format!(
                    "临时目录不存在：{}",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
