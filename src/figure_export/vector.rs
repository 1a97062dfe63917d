//! # 矢量渲染策略
//!
//! ## 实现思路
//!
//! 1. 宿主导出 EPS 到临时文件
//! 2. 外部光栅化工具按目标 DPI 输出 TIFF
//! 3. 立即删除 EPS（失败路径由临时文件守卫析构删除）
//! 4. 读回 TIFF 并删除
//!
//! 名义背景色取宿主声明值，真正的背景由边框归一化阶段测得。

use std::path::PathBuf;

use super::renderer::{FigureRenderer, RenderedFrame};
use super::temp_file::scoped_temp_file;
use super::{BackgroundColor, ExportError, FigureHost, RasterImage, Rasterizer, RenderSpec};

pub struct VectorRenderer<'a, H: FigureHost + ?Sized> {
    host: &'a H,
    rasterizer: &'a dyn Rasterizer,
    temp_dir: PathBuf,
}

impl<'a, H: FigureHost + ?Sized> VectorRenderer<'a, H> {
    pub fn new(host: &'a H, rasterizer: &'a dyn Rasterizer, temp_dir: PathBuf) -> Self {
        Self {
            host,
            rasterizer,
            temp_dir,
        }
    }
}

impl<H: FigureHost + ?Sized> FigureRenderer for VectorRenderer<'_, H> {
    fn render(&self, spec: &RenderSpec) -> Result<RenderedFrame, ExportError> {
        let declared = self.host.declared_color(spec.figure)?;

        let vector_file = scoped_temp_file(&self.temp_dir, "eps")?;
        self.host.export_vector(spec.figure, &vector_file)?;

        let bitmap_file = scoped_temp_file(&self.temp_dir, "tif")?;
        self.rasterizer.rasterize(&vector_file, &bitmap_file, spec.dpi)?;
        drop(vector_file);

        let raster = RasterImage::read_from_file(&bitmap_file)?;
        drop(bitmap_file);

        log::debug!(
            "🧾 矢量渲染完成：{}x{} @ {} DPI",
            raster.width(),
            raster.height(),
            spec.dpi
        );

        Ok(RenderedFrame {
            raster,
            declared,
            background: BackgroundColor::from_declared(declared),
        })
    }
}
