//! 导出配置加载
//!
//! 配置文件为 JSON，只需写出要覆盖的字段，其余取 `ExportConfig::default()`。

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::figure_export::ExportConfig;

/// 读取导出配置；未指定文件时返回默认配置。
pub fn load_export_config(path: Option<&Path>) -> Result<ExportConfig, AppError> {
    let Some(path) = path else {
        return Ok(ExportConfig::default());
    };

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("读取配置文件 {} 失败: {}", path.display(), e)))?;
    let config: ExportConfig = serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("解析配置文件失败: {}", e)))?;
    config.validate()?;

    log::debug!("⚙️ 已加载导出配置：{}", path.display());
    Ok(config)
}
