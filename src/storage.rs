//! 结果图像写出
//!
//! # 实现思路
//!
//! - 输出格式由扩展名决定，委托 `image` crate 编码。
//! - 父目录不存在时自动 `create_dir_all`，避免上层判断。

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::figure_export::RasterImage;

/// 将光栅写出到 `path`。
pub fn save_raster(raster: RasterImage, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Output(format!("创建输出目录 '{}' 失败: {}", parent.display(), e))
            })?;
        }
    }

    let (height, width, _) = raster.shape();
    raster
        .into_rgb_image()
        .save(path)
        .map_err(|e| AppError::Output(format!("写出图像 '{}' 失败: {}", path.display(), e)))?;

    log::info!("💾 已写出图像 - 路径: {} 尺寸: {}x{}", path.display(), width, height);
    Ok(())
}
