//! # 宿主图形系统接口
//!
//! ## 设计思路
//!
//! 渲染后端属于外部协作者。`FigureHost` 把导出链路真正需要的宿主能力收敛为一组方法：
//! 尺寸/颜色/DPI 查询、矢量导出、两种位图捕获通路，以及捕获前需要临时改写的全局属性。
//!
//! ## 实现思路
//!
//! - 所有方法只取 `&self`：宿主属性本质上是进程级共享状态，
//!   实现方自行使用内部可变性，这样守卫与捕获调用可以同时借用宿主。
//! - 属性设置方法返回 `Result`，恢复失败由守卫记录日志。

use std::path::Path;

use super::{ExportError, FigureColor, RasterImage};

/// 宿主管理的图形句柄（不透明标识）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureHandle(pub u64);

/// 图形的子对象句柄。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u64);

/// 子对象的动画擦除模式，只有 `Normal` 是确定性绘制。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    Normal,
    Background,
    Xor,
    None,
}

/// 直接捕获使用的渲染器。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectRenderer {
    OpenGl,
    ZBuffer,
}

impl DirectRenderer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenGl => "opengl",
            Self::ZBuffer => "zbuffer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperPositionMode {
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperOrientation {
    Portrait,
    Landscape,
    Rotated,
}

/// 图形的打印版面属性。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperLayout {
    pub position_mode: PaperPositionMode,
    pub orientation: PaperOrientation,
}

impl PaperLayout {
    /// 捕获期间使用的版面：按屏幕尺寸自动摆放、纵向。
    pub const CAPTURE: Self = Self {
        position_mode: PaperPositionMode::Auto,
        orientation: PaperOrientation::Portrait,
    };
}

/// 宿主图形系统。
pub trait FigureHost {
    /// 图形逻辑像素尺寸 `(width, height)`。
    fn logical_size(&self, figure: FigureHandle) -> Result<(u32, u32), ExportError>;

    fn declared_color(&self, figure: FigureHandle) -> Result<FigureColor, ExportError>;

    fn screen_dpi(&self) -> Result<f64, ExportError>;

    /// 将图形导出为 EPS 到 `path`。
    fn export_vector(&self, figure: FigureHandle, path: &Path) -> Result<(), ExportError>;

    /// 内存快速捕获（非公开通路，可能不可用）。
    fn capture_frame(
        &self,
        figure: FigureHandle,
        renderer: DirectRenderer,
        dpi: u32,
    ) -> Result<RasterImage, ExportError>;

    /// 通过标准打印通路把位图写到 `path`。
    fn print_bitmap(
        &self,
        figure: FigureHandle,
        renderer: DirectRenderer,
        dpi: u32,
        path: &Path,
    ) -> Result<(), ExportError>;

    /// 枚举子对象；是否包含隐藏句柄取决于 `show_hidden_handles`。
    fn children(&self, figure: FigureHandle) -> Result<Vec<ObjectHandle>, ExportError>;

    /// 子对象的擦除模式，不支持该属性的对象返回 `None`。
    fn erase_mode(&self, object: ObjectHandle) -> Result<Option<EraseMode>, ExportError>;

    fn set_erase_mode(&self, object: ObjectHandle, mode: EraseMode) -> Result<(), ExportError>;

    fn paper_layout(&self, figure: FigureHandle) -> Result<PaperLayout, ExportError>;

    fn set_paper_layout(&self, figure: FigureHandle, layout: PaperLayout) -> Result<(), ExportError>;

    fn show_hidden_handles(&self) -> Result<bool, ExportError>;

    fn set_show_hidden_handles(&self, show: bool) -> Result<(), ExportError>;
}
