//! # 导出请求描述
//!
//! `RenderSpec` 在请求开始时构建、交给渲染策略消费后即丢弃；
//! `ExpectedExtent` 是按逻辑尺寸与缩放倍数推算的理论输出尺寸，只用于校验与截断。

use std::str::FromStr;

use super::{DirectRenderer, ExportError, FigureHandle};

/// 渲染策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// 导出 EPS，再由外部光栅化工具转为位图。
    Vector,
    /// 直接捕获位图。
    Direct(DirectRenderer),
}

impl RenderStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vector => "painters",
            Self::Direct(renderer) => renderer.as_str(),
        }
    }
}

impl FromStr for RenderStrategy {
    type Err = ExportError;

    /// 解析渲染器参数，如 `-painters` / `opengl` / `-ZBuffer`。
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().trim_start_matches('-').to_lowercase();
        match normalized.as_str() {
            "painters" => Ok(Self::Vector),
            "opengl" => Ok(Self::Direct(DirectRenderer::OpenGl)),
            "zbuffer" => Ok(Self::Direct(DirectRenderer::ZBuffer)),
            _ => Err(ExportError::RenderBackend(format!(
                "不支持的渲染器参数：{}（可选：-painters / -opengl / -zbuffer）",
                value
            ))),
        }
    }
}

/// 单次导出请求。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSpec {
    pub figure: FigureHandle,
    pub scale: f64,
    pub strategy: RenderStrategy,
    /// 光栅化分辨率，`ceil(render_dpi * scale)`。
    pub dpi: u32,
    /// 理论尺寸的实际倍数：`scale * (render_dpi / host_dpi)`。
    ///
    /// 逻辑尺寸按宿主真实 DPI 度量；配置覆盖了渲染 DPI 时，输出会按同一比例放大。
    pub extent_scale: f64,
}

impl RenderSpec {
    /// `host_dpi` 是宿主报告的屏幕 DPI，`dpi_override` 来自配置。
    pub fn new(
        figure: FigureHandle,
        scale: f64,
        strategy: RenderStrategy,
        host_dpi: f64,
        dpi_override: Option<f64>,
    ) -> Result<Self, ExportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ExportError::InvalidRequest(format!(
                "缩放倍数必须为正数，当前：{}",
                scale
            )));
        }
        let render_dpi = dpi_override.unwrap_or(host_dpi);
        for (name, value) in [("屏幕 DPI", host_dpi), ("渲染 DPI", render_dpi)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::InvalidRequest(format!(
                    "{}必须为正数，当前：{}",
                    name, value
                )));
            }
        }

        let dpi = (render_dpi * scale).ceil();
        if dpi > u32::MAX as f64 {
            return Err(ExportError::InvalidRequest(format!("分辨率溢出：{} DPI", dpi)));
        }

        Ok(Self {
            figure,
            scale,
            strategy,
            dpi: dpi as u32,
            extent_scale: scale * (render_dpi / host_dpi),
        })
    }

    /// 理论尺寸倍数是否为整数；非整数倍数下理论尺寸不可靠，跳过尺寸校正。
    pub fn has_whole_scale(&self) -> bool {
        self.extent_scale.fract() == 0.0
    }

    /// 按逻辑尺寸推算理论输出尺寸。
    pub fn expected_extent(&self, logical_width: u32, logical_height: u32) -> ExpectedExtent {
        ExpectedExtent::from_logical(logical_width, logical_height, self.extent_scale)
    }
}

/// 理论输出尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedExtent {
    pub height: u32,
    pub width: u32,
}

impl ExpectedExtent {
    /// `round(logical_size * scale)`。
    pub fn from_logical(width: u32, height: u32, scale: f64) -> Self {
        let scaled = |value: u32| (value as f64 * scale).round().clamp(0.0, u32::MAX as f64) as u32;
        Self {
            height: scaled(height),
            width: scaled(width),
        }
    }

    pub fn pixel_count(&self) -> u64 {
        self.height as u64 * self.width as u64
    }
}
