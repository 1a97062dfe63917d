//! # 尺寸校正
//!
//! 渲染后端偶尔比理论尺寸多输出几个像素（后端内部取整误差）。
//! 这里只做收缩：实际尺寸与 `ExpectedExtent` 不一致时，保留左上角 `min(实际, 理论)` 区域。
//! 从不填充或放大。
//!
//! 非整数缩放倍数下理论尺寸不可靠，直接跳过校正（已知限制）。

use super::{ExpectedExtent, RasterImage, RenderSpec};

pub fn reconcile_dimensions(raster: RasterImage, expected: ExpectedExtent, spec: &RenderSpec) -> RasterImage {
    if !spec.has_whole_scale() {
        return raster;
    }
    let height = raster.height().min(expected.height);
    let width = raster.width().min(expected.width);
    if height == raster.height() && width == raster.width() {
        return raster;
    }

    log::debug!(
        "✂️ 尺寸校正：{}x{} -> {}x{}（理论 {}x{}）",
        raster.width(),
        raster.height(),
        width,
        height,
        expected.width,
        expected.height
    );
    raster.cropped_top_left(height, width)
}
