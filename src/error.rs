//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 命令行前端与设置、输出等外围功能统一返回 `AppError`，
//! 导出链路内部的 `ExportError` 通过 `From` 自动上转，无需手动 map。

use crate::figure_export::ExportError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 导出流水线错误（渲染 / 归一化 / 校正）
    #[error("{0}")]
    Export(#[from] ExportError),

    /// 配置文件读取或解析失败
    #[error("配置错误: {0}")]
    Config(String),

    /// 结果图像写出失败
    #[error("输出失败: {0}")]
    Output(String),

    /// 命令行参数无效
    #[error("参数错误: {0}")]
    InvalidArgument(String),
}
