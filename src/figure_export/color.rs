//! # 背景色模型与解析
//!
//! ## 设计思路
//!
//! 宿主声明的颜色是 `[0, 1]` 浮点三元组（或 `None`），导出链路需要的是 8 位 RGB。
//! 两种策略的换算规则不同：
//! - 矢量策略：四舍五入后交给边框归一化，最终以实测中位数为准。
//! - 直接策略：换算结果恰为整数才采用，否则以捕获图像左上角像素为准
//!   （渲染器自身的颜色量化不会反映在声明值中）。

use super::RasterImage;

/// 纯白。
pub const WHITE: [u8; 3] = [255, 255, 255];

const INTEGER_TOLERANCE: f64 = 1e-9;

/// 宿主图形系统声明的颜色属性。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FigureColor {
    None,
    Rgb([f64; 3]),
}

impl FigureColor {
    /// 声明值逐通道恰为 1.0。
    ///
    /// 只看声明值本身：`0.999` 换算取整后虽是 255，但不算纯白。
    pub fn is_exact_white(self) -> bool {
        matches!(self, Self::Rgb(rgb) if rgb.iter().all(|&channel| channel == 1.0))
    }
}

/// 导出结果的背景色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundColor {
    /// 无固定背景。
    Transparent,
    Rgb([u8; 3]),
}

impl BackgroundColor {
    pub fn rgb(self) -> Option<[u8; 3]> {
        match self {
            Self::Transparent => None,
            Self::Rgb(rgb) => Some(rgb),
        }
    }

    /// 矢量策略使用的名义背景色：按通道换算后四舍五入。
    pub fn from_declared(declared: FigureColor) -> Self {
        match declared {
            FigureColor::None => Self::Transparent,
            FigureColor::Rgb(rgb) => Self::Rgb(scale_rgb(rgb).map(round_channel)),
        }
    }

    /// 直接策略使用的背景色解析。
    pub fn resolve_captured(declared: FigureColor, raster: &RasterImage) -> Self {
        let FigureColor::Rgb(rgb) = declared else {
            return Self::Transparent;
        };

        let scaled = scale_rgb(rgb);
        let exact = scaled
            .iter()
            .all(|channel| (channel - channel.round()).abs() < INTEGER_TOLERANCE);

        if exact || raster.is_empty() {
            return Self::Rgb(scaled.map(round_channel));
        }

        let sampled = raster.pixel(0, 0);
        log::debug!(
            "🎨 声明背景色 {:?} 不是整数 8 位值，改用左上角像素 {:?}",
            scaled,
            sampled
        );
        Self::Rgb(sampled)
    }
}

fn scale_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|channel| channel * 255.0)
}

fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// 按通道求中位数；偶数个样本取中间两值均值并四舍五入。
///
/// 空输入返回 `None`。
pub(crate) fn channel_median(samples: &[[u8; 3]]) -> Option<[u8; 3]> {
    if samples.is_empty() {
        return None;
    }

    let mut median = [0u8; 3];
    let mut channel_values = Vec::with_capacity(samples.len());
    for (channel, slot) in median.iter_mut().enumerate() {
        channel_values.clear();
        channel_values.extend(samples.iter().map(|pixel| pixel[channel]));
        channel_values.sort_unstable();

        let mid = channel_values.len() / 2;
        *slot = if channel_values.len() % 2 == 1 {
            channel_values[mid]
        } else {
            let sum = channel_values[mid - 1] as u16 + channel_values[mid] as u16;
            sum.div_ceil(2) as u8
        };
    }
    Some(median)
}
