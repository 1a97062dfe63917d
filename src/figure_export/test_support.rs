//! 单元测试用的宿主与光栅化器替身。

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use super::{
    DirectRenderer, EraseMode, ExportError, FigureColor, FigureHandle, FigureHost, ObjectHandle,
    PaperLayout, PaperOrientation, PaperPositionMode, RasterImage, Rasterizer,
};

pub(crate) const MANUAL_LANDSCAPE: PaperLayout = PaperLayout {
    position_mode: PaperPositionMode::Manual,
    orientation: PaperOrientation::Landscape,
};

/// 捕获瞬间观察到的宿主状态。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CaptureState {
    pub(crate) paper: PaperLayout,
    pub(crate) erase_modes: Vec<Option<EraseMode>>,
    pub(crate) show_hidden: bool,
}

pub(crate) struct MockFigure {
    pub(crate) size: (u32, u32),
    pub(crate) color: FigureColor,
    pub(crate) dpi: f64,
    /// `None` 表示快速捕获不可用。
    pub(crate) fast_frame: Option<RasterImage>,
    /// `None` 表示打印通路失败。
    pub(crate) printed_frame: Option<RasterImage>,
    pub(crate) visible_children: Vec<ObjectHandle>,
    pub(crate) hidden_children: Vec<ObjectHandle>,
    pub(crate) erase_modes: RefCell<Vec<(ObjectHandle, Option<EraseMode>)>>,
    /// 对该子对象设置擦除模式时返回错误。
    pub(crate) locked_child: Option<ObjectHandle>,
    pub(crate) paper: Cell<PaperLayout>,
    pub(crate) show_hidden: Cell<bool>,
    pub(crate) captures: RefCell<Vec<CaptureState>>,
    pub(crate) written_files: RefCell<Vec<PathBuf>>,
}

impl MockFigure {
    pub(crate) fn new(size: (u32, u32), color: FigureColor) -> Self {
        Self {
            size,
            color,
            dpi: 96.0,
            fast_frame: None,
            printed_frame: None,
            visible_children: Vec::new(),
            hidden_children: Vec::new(),
            erase_modes: RefCell::new(Vec::new()),
            locked_child: None,
            paper: Cell::new(MANUAL_LANDSCAPE),
            show_hidden: Cell::new(false),
            captures: RefCell::new(Vec::new()),
            written_files: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_child(mut self, handle: u64, mode: Option<EraseMode>, hidden: bool) -> Self {
        let child = ObjectHandle(handle);
        if hidden {
            self.hidden_children.push(child);
        } else {
            self.visible_children.push(child);
        }
        self.erase_modes.get_mut().push((child, mode));
        self
    }

    pub(crate) fn current_erase_modes(&self) -> Vec<Option<EraseMode>> {
        self.erase_modes.borrow().iter().map(|(_, mode)| *mode).collect()
    }

    fn record_capture(&self) {
        self.captures.borrow_mut().push(CaptureState {
            paper: self.paper.get(),
            erase_modes: self.current_erase_modes(),
            show_hidden: self.show_hidden.get(),
        });
    }
}

impl FigureHost for MockFigure {
    fn logical_size(&self, _figure: FigureHandle) -> Result<(u32, u32), ExportError> {
        Ok(self.size)
    }

    fn declared_color(&self, _figure: FigureHandle) -> Result<FigureColor, ExportError> {
        Ok(self.color)
    }

    fn screen_dpi(&self) -> Result<f64, ExportError> {
        Ok(self.dpi)
    }

    fn export_vector(&self, _figure: FigureHandle, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, b"%!PS-Adobe-3.0 EPSF-3.0\n")
            .map_err(|e| ExportError::FileSystem(e.to_string()))?;
        self.written_files.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn capture_frame(
        &self,
        _figure: FigureHandle,
        _renderer: DirectRenderer,
        _dpi: u32,
    ) -> Result<RasterImage, ExportError> {
        self.record_capture();
        self.fast_frame
            .clone()
            .ok_or_else(|| ExportError::RenderBackend("hardcopy unavailable".to_string()))
    }

    fn print_bitmap(
        &self,
        _figure: FigureHandle,
        _renderer: DirectRenderer,
        _dpi: u32,
        path: &Path,
    ) -> Result<(), ExportError> {
        self.record_capture();
        let frame = self
            .printed_frame
            .clone()
            .ok_or_else(|| ExportError::RenderBackend("print failed".to_string()))?;
        frame
            .into_rgb_image()
            .save(path)
            .map_err(|e| ExportError::FileSystem(e.to_string()))?;
        self.written_files.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn children(&self, _figure: FigureHandle) -> Result<Vec<ObjectHandle>, ExportError> {
        let mut children = self.visible_children.clone();
        if self.show_hidden.get() {
            children.extend(self.hidden_children.iter().copied());
        }
        Ok(children)
    }

    fn erase_mode(&self, object: ObjectHandle) -> Result<Option<EraseMode>, ExportError> {
        Ok(self
            .erase_modes
            .borrow()
            .iter()
            .find(|(handle, _)| *handle == object)
            .and_then(|(_, mode)| *mode))
    }

    fn set_erase_mode(&self, object: ObjectHandle, mode: EraseMode) -> Result<(), ExportError> {
        if self.locked_child == Some(object) {
            return Err(ExportError::Host(format!("EraseMode of {:?} is read-only", object)));
        }
        let mut modes = self.erase_modes.borrow_mut();
        let entry = modes
            .iter_mut()
            .find(|(handle, _)| *handle == object)
            .ok_or_else(|| ExportError::Host(format!("unknown object {:?}", object)))?;
        entry.1 = Some(mode);
        Ok(())
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

/// 把固定光栅写成 TIFF 的光栅化器，记录调用时输入文件是否存在。
pub(crate) struct FixedRasterizer {
    pub(crate) output: RasterImage,
    pub(crate) calls: RefCell<Vec<(PathBuf, bool, u32)>>,
}

impl FixedRasterizer {
    pub(crate) fn new(output: RasterImage) -> Self {
        Self {
            output,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Rasterizer for FixedRasterizer {
    fn rasterize(&self, input: &Path, output: &Path, dpi: u32) -> Result<(), ExportError> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), input.exists(), dpi));
        self.output
            .clone()
            .into_rgb_image()
            .save(output)
            .map_err(|e| ExportError::FileSystem(e.to_string()))
    }
}

/// 总是失败的光栅化器。
pub(crate) struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _input: &Path, _output: &Path, _dpi: u32) -> Result<(), ExportError> {
        Err(ExportError::RenderBackend("exit code 1".to_string()))
    }
}
