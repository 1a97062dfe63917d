//! # 边框归一化（仅矢量策略）
//!
//! ## 设计思路
//!
//! 光栅化工具输出的图像边缘常带一圈不受控的细边，颜色与图形真实背景不一致。
//! 这里从四条边向内扫描，找出包含非纯白内容的最小矩形，
//! 再以矩形四条边界线上像素的逐通道中位数作为背景色，重刷矩形外的所有像素。
//!
//! 取整条边界线的中位数而不是角点像素：角点更容易混入坐标轴、文字的抗锯齿。
//!
//! ## 已知限制
//!
//! 非白背景下，若图形真实内容在边缘处恰好是纯白，会被当作边框处理。

use super::color::{self, WHITE};
use super::{BackgroundColor, FigureColor, RasterImage};

/// 内容区域（闭区间，0 起始）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl ContentBounds {
    fn full(raster: &RasterImage) -> Self {
        Self {
            left: 0,
            right: raster.width().saturating_sub(1),
            top: 0,
            bottom: raster.height().saturating_sub(1),
        }
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.left..=self.right).contains(&col) && (self.top..=self.bottom).contains(&row)
    }

    pub fn spans(&self, raster: &RasterImage) -> bool {
        *self == Self::full(raster)
    }
}

/// 归一化结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderReport {
    /// 归一化后的背景色（规范填充色）。
    pub background: BackgroundColor,
    /// 实际扫描得到的内容区域；跳过扫描时为 `None`。
    pub bounds: Option<ContentBounds>,
}

/// 就地归一化边框，返回规范填充色。
///
/// - 声明色为 `None`：不做任何修改
/// - 声明色恰为 `[1, 1, 1]`：填充色即纯白，矩形外本就全白，无需扫描
/// - 其余：扫描 → 中位数 → 重刷
pub fn normalize_border(raster: &mut RasterImage, declared: FigureColor) -> BorderReport {
    let background = BackgroundColor::from_declared(declared);
    if declared == FigureColor::None || declared.is_exact_white() {
        return BorderReport {
            background,
            bounds: None,
        };
    }

    let bounds = find_content_bounds(raster);
    let Some(fill) = color::channel_median(&boundary_pixels(raster, &bounds)) else {
        return BorderReport {
            background,
            bounds: Some(bounds),
        };
    };

    let repainted = paint_outside(raster, &bounds, fill);
    log::debug!(
        "🖌️ 边框归一化：内容区域 cols {}..={} rows {}..={}，填充色 {:?}，重刷 {} 像素",
        bounds.left,
        bounds.right,
        bounds.top,
        bounds.bottom,
        fill,
        repainted
    );

    BorderReport {
        background: BackgroundColor::Rgb(fill),
        bounds: Some(bounds),
    }
}

/// 从四边向内找第一条不全为纯白的列/行；整图纯白时返回整幅范围。
pub fn find_content_bounds(raster: &RasterImage) -> ContentBounds {
    let (width, height) = (raster.width(), raster.height());
    let column_is_white = |col: u32| (0..height).all(|row| raster.pixel(row, col) == WHITE);
    let row_is_white = |row: u32| (0..width).all(|col| raster.pixel(row, col) == WHITE);

    let Some(left) = (0..width).find(|&col| !column_is_white(col)) else {
        return ContentBounds::full(raster);
    };
    let right = (left..width)
        .rev()
        .find(|&col| !column_is_white(col))
        .unwrap_or(left);
    let top = (0..height).find(|&row| !row_is_white(row)).unwrap_or(0);
    let bottom = (top..height)
        .rev()
        .find(|&row| !row_is_white(row))
        .unwrap_or(top);

    ContentBounds {
        left,
        right,
        top,
        bottom,
    }
}

/// 边界线上的全部像素：左右两列（整列）与上下两行（整行）。
fn boundary_pixels(raster: &RasterImage, bounds: &ContentBounds) -> Vec<[u8; 3]> {
    let (width, height) = (raster.width(), raster.height());
    let mut pixels = Vec::with_capacity(2 * (width + height) as usize);
    for col in [bounds.left, bounds.right] {
        pixels.extend((0..height).map(|row| raster.pixel(row, col)));
    }
    for row in [bounds.top, bounds.bottom] {
        pixels.extend((0..width).map(|col| raster.pixel(row, col)));
    }
    pixels
}

fn paint_outside(raster: &mut RasterImage, bounds: &ContentBounds, fill: [u8; 3]) -> usize {
    let mut repainted = 0;
    for row in 0..raster.height() {
        for col in 0..raster.width() {
            if !bounds.contains(row, col) {
                raster.set_pixel(row, col, fill);
                repainted += 1;
            }
        }
    }
    repainted
}
