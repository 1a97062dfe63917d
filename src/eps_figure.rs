//! # EPS 文件图形
//!
//! ## 设计思路
//!
//! 命令行前端没有真实的图形宿主，这里把磁盘上的一个 EPS 文件包装成 `FigureHost`：
//! - 逻辑尺寸取 `%%BoundingBox`，按 72 DPI 解释（1 pt = 1 px）
//! - 声明背景色由调用方给出
//! - 只支持矢量策略，直接捕获类请求返回 `RenderBackend` 错误
//!
//! ## 实现思路
//!
//! 通过 `once_cell::sync::Lazy` 在首次调用时编译正则，后续零成本复用。

use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::Cell;
use std::path::{Path, PathBuf};

use crate::figure_export::{
    DirectRenderer, EraseMode, ExportError, FigureColor, FigureHandle, FigureHost, ObjectHandle,
    PaperLayout, PaperOrientation, PaperPositionMode, RasterImage,
};

/// PostScript 单位：每英寸 72 点。
pub const POINTS_PER_INCH: f64 = 72.0;

/// 只在文件头部查找 DSC 注释。
const HEADER_SCAN_BYTES: usize = 64 * 1024;

static BOUNDING_BOX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^%%BoundingBox:[ \t]*(-?\d+)[ \t]+(-?\d+)[ \t]+(-?\d+)[ \t]+(-?\d+)")
        .expect("bounding box pattern is valid")
});

/// `%%BoundingBox` 四元组（单位：点）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub llx: i64,
    pub lly: i64,
    pub urx: i64,
    pub ury: i64,
}

impl BoundingBox {
    /// 从 EPS 头部解析；找不到或尺寸非正时返回 `None`。
    pub fn parse(header: &str) -> Option<Self> {
        let caps = BOUNDING_BOX.captures(header)?;
        let value = |idx: usize| caps.get(idx)?.as_str().parse::<i64>().ok();
        let bbox = Self {
            llx: value(1)?,
            lly: value(2)?,
            urx: value(3)?,
            ury: value(4)?,
        };
        (bbox.urx > bbox.llx && bbox.ury > bbox.lly).then_some(bbox)
    }

    pub fn width(&self) -> u32 {
        (self.urx - self.llx).clamp(0, u32::MAX as i64) as u32
    }

    pub fn height(&self) -> u32 {
        (self.ury - self.lly).clamp(0, u32::MAX as i64) as u32
    }
}

/// 磁盘上的 EPS 文件图形。
pub struct EpsFigure {
    source: PathBuf,
    bounding_box: BoundingBox,
    color: FigureColor,
    paper: Cell<PaperLayout>,
    show_hidden: Cell<bool>,
}

impl EpsFigure {
    pub fn open(source: impl Into<PathBuf>, color: FigureColor) -> Result<Self, ExportError> {
        let source = source.into();
        let bytes = std::fs::read(&source).map_err(|e| {
            ExportError::FileSystem(format!("无法读取 EPS 文件 {}：{}", source.display(), e))
        })?;
        let header = String::from_utf8_lossy(&bytes[..bytes.len().min(HEADER_SCAN_BYTES)]);
        let bounding_box = BoundingBox::parse(&header).ok_or_else(|| {
            ExportError::InvalidRequest(format!(
                "EPS 文件缺少有效的 %%BoundingBox：{}",
                source.display()
            ))
        })?;

        log::info!(
            "📄 已加载 EPS 图形 - 路径: {} 尺寸: {}x{} pt",
            source.display(),
            bounding_box.width(),
            bounding_box.height()
        );

        Ok(Self {
            source,
            bounding_box,
            color,
            paper: Cell::new(PaperLayout {
                position_mode: PaperPositionMode::Manual,
                orientation: PaperOrientation::Portrait,
            }),
            show_hidden: Cell::new(false),
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    fn direct_capture_unsupported() -> ExportError {
        ExportError::RenderBackend("EPS 文件图形仅支持 -painters 矢量策略".to_string())
    }
}

impl FigureHost for EpsFigure {
    fn logical_size(&self, _figure: FigureHandle) -> Result<(u32, u32), ExportError> {
        Ok((self.bounding_box.width(), self.bounding_box.height()))
    }

    fn declared_color(&self, _figure: FigureHandle) -> Result<FigureColor, ExportError> {
        Ok(self.color)
    }

    fn screen_dpi(&self) -> Result<f64, ExportError> {
        Ok(POINTS_PER_INCH)
    }

    fn export_vector(&self, _figure: FigureHandle, path: &Path) -> Result<(), ExportError> {
        std::fs::copy(&self.source, path)
            .map(|_| ())
            .map_err(|e| ExportError::FileSystem(format!("复制 EPS 到临时文件失败：{}", e)))
    }

    fn capture_frame(
        &self,
        _figure: FigureHandle,
        _renderer: DirectRenderer,
        _dpi: u32,
    ) -> Result<RasterImage, ExportError> {
        Err(Self::direct_capture_unsupported())
    }

    fn print_bitmap(
        &self,
        _figure: FigureHandle,
        _renderer: DirectRenderer,
        _dpi: u32,
        _path: &Path,
    ) -> Result<(), ExportError> {
        Err(Self::direct_capture_unsupported())
    }

    fn children(&self, _figure: FigureHandle) -> Result<Vec<ObjectHandle>, ExportError> {
        Ok(Vec::new())
    }

    fn erase_mode(&self, _object: ObjectHandle) -> Result<Option<EraseMode>, ExportError> {
        Ok(None)
    }

    fn set_erase_mode(&self, object: ObjectHandle, _mode: EraseMode) -> Result<(), ExportError> {
        Err(ExportError::Host(format!("EPS 图形没有子对象：{:?}", object)))
    }

    fn paper_layout(&self, _figure: FigureHandle) -> Result<PaperLayout, ExportError> {
        Ok(self.paper.get())
    }

    fn set_paper_layout(&self, _figure: FigureHandle, layout: PaperLayout) -> Result<(), ExportError> {
        self.paper.set(layout);
        Ok(())
    }

    fn show_hidden_handles(&self) -> Result<bool, ExportError> {
        Ok(self.show_hidden.get())
    }

    fn set_show_hidden_handles(&self, show: bool) -> Result<(), ExportError> {
        self.show_hidden.set(show);
        Ok(())
    }
}
