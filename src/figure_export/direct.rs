//! # 直接捕获策略
//!
//! ## 设计思路
//!
//! 直接从宿主取位图，捕获前先把会影响绘制结果的全局属性改写为确定值：
//! - 打印版面：自动摆放 + 纵向
//! - 子对象擦除模式：统一改为 `Normal`（枚举子对象时临时打开“显示隐藏句柄”）
//!
//! 所有改写都由 `ScopedOverride` 守卫持有，捕获成功或失败都会在返回前恢复。
//!
//! ## 实现思路
//!
//! 捕获本身是“一次快速尝试 + 一次文件回退”：内存快速捕获失败时，
//! 走标准打印通路写临时位图再读回，不做通用重试循环。

use std::path::PathBuf;

use super::guard::ScopedOverride;
use super::renderer::{FigureRenderer, RenderedFrame};
use super::temp_file::scoped_temp_file;
use super::{
    BackgroundColor, DirectRenderer, EraseMode, ExportError, FigureHandle, FigureHost,
    PaperLayout, RasterImage, RenderSpec, RenderStrategy,
};

pub struct DirectCaptureRenderer<'a, H: FigureHost + ?Sized> {
    host: &'a H,
    temp_dir: PathBuf,
    fast_capture: bool,
}

impl<'a, H: FigureHost + ?Sized> DirectCaptureRenderer<'a, H> {
    pub fn new(host: &'a H, temp_dir: PathBuf, fast_capture: bool) -> Self {
        Self {
            host,
            temp_dir,
            fast_capture,
        }
    }

    /// 把所有非 `Normal` 擦除模式的子对象改为 `Normal`，返回对应守卫。
    fn force_normal_erase_modes(
        &self,
        figure: FigureHandle,
    ) -> Result<Vec<ScopedOverride<'a, EraseMode>>, ExportError> {
        let host = self.host;
        let children = {
            let _hidden = ScopedOverride::apply(
                "ShowHiddenHandles",
                host.show_hidden_handles()?,
                true,
                move |show| host.set_show_hidden_handles(show),
            )?;
            host.children(figure)?
        };

        let mut guards = Vec::new();
        for child in children {
            let Some(mode) = host.erase_mode(child)? else {
                continue;
            };
            if mode == EraseMode::Normal {
                continue;
            }
            guards.push(ScopedOverride::apply(
                "EraseMode",
                mode,
                EraseMode::Normal,
                move |mode| host.set_erase_mode(child, mode),
            )?);
        }

        if !guards.is_empty() {
            log::debug!("🎞️ 已临时将 {} 个子对象的擦除模式设为 normal", guards.len());
        }
        Ok(guards)
    }

    fn capture(&self, spec: &RenderSpec, renderer: DirectRenderer) -> Result<RasterImage, ExportError> {
        if self.fast_capture {
            match self.host.capture_frame(spec.figure, renderer, spec.dpi) {
                Ok(raster) => return Ok(raster),
                Err(err) => {
                    log::warn!("⚠️ 内存快速捕获失败，回退到打印通路：{}", err);
                }
            }
        }

        let bitmap_file = scoped_temp_file(&self.temp_dir, "tif")?;
        self.host
            .print_bitmap(spec.figure, renderer, spec.dpi, &bitmap_file)?;
        RasterImage::read_from_file(&bitmap_file)
    }
}

impl<H: FigureHost + ?Sized> FigureRenderer for DirectCaptureRenderer<'_, H> {
    fn render(&self, spec: &RenderSpec) -> Result<RenderedFrame, ExportError> {
        let RenderStrategy::Direct(renderer) = spec.strategy else {
            return Err(ExportError::InvalidRequest(format!(
                "直接捕获策略不支持渲染器：{}",
                spec.strategy.as_str()
            )));
        };

        let host = self.host;
        let figure = spec.figure;
        let declared = host.declared_color(figure)?;

        let raster = {
            let _paper = ScopedOverride::apply(
                "PaperLayout",
                host.paper_layout(figure)?,
                PaperLayout::CAPTURE,
                move |layout| host.set_paper_layout(figure, layout),
            )?;
            let _erase_modes = self.force_normal_erase_modes(figure)?;
            self.capture(spec, renderer)?
        };

        Ok(RenderedFrame {
            background: BackgroundColor::resolve_captured(declared, &raster),
            declared,
            raster,
        })
    }
}
