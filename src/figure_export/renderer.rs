//! # 渲染策略接口
//!
//! 两种策略（矢量 / 直接捕获）实现同一个 `FigureRenderer`，
//! 各自在内部完成自己的回退逻辑，由编排器按 `RenderStrategy` 选择。

use super::{BackgroundColor, ExportError, FigureColor, RasterImage, RenderSpec};

/// 渲染阶段输出：原始光栅、宿主声明色与名义背景色。
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub raster: RasterImage,
    /// 边框归一化按声明值判断是否需要扫描。
    pub declared: FigureColor,
    pub background: BackgroundColor,
}

pub trait FigureRenderer {
    fn render(&self, spec: &RenderSpec) -> Result<RenderedFrame, ExportError>;
}
