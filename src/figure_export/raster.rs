//! # 光栅数据模型
//!
//! ## 设计思路
//!
//! `RasterImage` 是 (行, 列, 通道) 三维 8 位数组，通道固定为 RGB。
//! 底层直接复用 `image::RgbImage`，保证矩形不变量由缓冲区本身维持，
//! 对外只暴露按 (row, col) 访问的接口，避免 (x, y) 与 (row, col) 混用。

use image::{GenericImageView, ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use super::ExportError;

/// 光栅图像（行优先、自上而下、RGB）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbImage,
}

impl RasterImage {
    /// 创建 `height × width` 的纯色图像。
    pub fn filled(height: u32, width: u32, color: [u8; 3]) -> Self {
        Self {
            pixels: ImageBuffer::from_pixel(width, height, Rgb(color)),
        }
    }

    /// 按 `(row, col)` 逐像素生成图像。
    pub fn from_fn<F>(height: u32, width: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        Self {
            pixels: ImageBuffer::from_fn(width, height, |col, row| Rgb(f(row, col))),
        }
    }

    /// 从行优先 RGB 字节构建，长度必须为 `height * width * 3`。
    pub fn from_raw(height: u32, width: u32, bytes: Vec<u8>) -> Result<Self, ExportError> {
        let len = bytes.len();
        ImageBuffer::from_raw(width, height, bytes)
            .map(|pixels| Self { pixels })
            .ok_or_else(|| {
                ExportError::Decode(format!(
                    "像素数据长度异常：{} 字节，期望 {}x{}x3",
                    len, height, width
                ))
            })
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// `(rows, cols, channels)`。
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height() as usize, self.width() as usize, 3)
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    pub fn pixel(&self, row: u32, col: u32) -> [u8; 3] {
        self.pixels.get_pixel(col, row).0
    }

    pub fn set_pixel(&mut self, row: u32, col: u32, color: [u8; 3]) {
        self.pixels.put_pixel(col, row, Rgb(color));
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn into_rgb_image(self) -> RgbImage {
        self.pixels
    }

    /// 左上角对齐裁剪，超出实际尺寸的部分自动截断。
    pub fn cropped_top_left(&self, height: u32, width: u32) -> Self {
        let height = height.min(self.height());
        let width = width.min(self.width());
        Self {
            pixels: self.pixels.view(0, 0, width, height).to_image(),
        }
    }

    /// 读回渲染后端写出的位图文件，统一转换为 RGB8。
    pub(crate) fn read_from_file(path: &Path) -> Result<Self, ExportError> {
        let decoded = image::open(path).map_err(|e| {
            ExportError::Decode(format!("无法读取位图 {}：{}", path.display(), e))
        })?;
        Ok(Self {
            pixels: decoded.to_rgb8(),
        })
    }
}
