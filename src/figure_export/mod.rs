//! # 图形导出模块（figure_export）
//!
//! ## 设计思路
//!
//! 把“宿主渲染 → 边框归一化 → 尺寸校正”按职责拆分为多个子模块。
//! 宿主图形系统与外部光栅化工具都是协作者，通过 trait 注入，核心只负责后处理。
//!
//! - `host`：宿主能力抽象（`FigureHost`）与句柄/属性类型
//! - `rasterizer`：外部光栅化工具（`Rasterizer` / `Ghostscript`）
//! - `vector` / `direct`：两种渲染策略，各自包含本地回退
//! - `border`：边框扫描与背景色中位数估计
//! - `reconcile`：尺寸只缩不扩的校正
//! - `handler`：编排整条流水线
//! - `guard` / `temp_file`：属性改写守卫与临时文件守卫（RAII）
//! - `config/error/request/raster/color`：配置、错误、请求与数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! FigureExporter::export
//!    ├─ RenderSpec / ExpectedExtent（DPI、理论尺寸、超大提示）
//!    ├─ VectorRenderer ── host.export_vector → Rasterizer → 读回 TIFF
//!    │     └─ normalize_border（仅矢量策略）
//!    ├─ DirectCaptureRenderer ── 守卫改写属性 → capture_frame ⇢ print_bitmap
//!    └─ reconcile_dimensions
//! ```

mod border;
mod color;
mod config;
mod direct;
mod error;
mod guard;
mod handler;
mod host;
mod raster;
mod rasterizer;
mod reconcile;
mod renderer;
mod request;
mod temp_file;
mod vector;

#[cfg(test)]
mod test_support;

pub use border::{find_content_bounds, normalize_border, BorderReport, ContentBounds};
pub use color::{BackgroundColor, FigureColor, WHITE};
pub use config::{ExportConfig, DEFAULT_LARGE_OUTPUT_PIXELS};
pub use direct::DirectCaptureRenderer;
pub use error::{ExportError, SizeWarning};
pub use guard::ScopedOverride;
pub use handler::{ExportOutput, FigureExporter};
pub use host::{
    DirectRenderer, EraseMode, FigureHandle, FigureHost, ObjectHandle, PaperLayout,
    PaperOrientation, PaperPositionMode,
};
pub use raster::RasterImage;
pub use rasterizer::{Ghostscript, Rasterizer};
pub use reconcile::reconcile_dimensions;
pub use renderer::{FigureRenderer, RenderedFrame};
pub use request::{ExpectedExtent, RenderSpec, RenderStrategy};
pub use vector::VectorRenderer;
