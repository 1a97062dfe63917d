//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 导出链路中所有致命错误统一由 `ExportError` 承载，调用侧可按分支匹配。
//! 超大输出提示 `SizeWarning` 不是错误：只记录日志并随结果返回，从不中断流程。

use std::fmt;

/// 图像导出统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// 光栅化工具或捕获通路失败（工具缺失、非零退出、不支持的渲染器参数）。
    #[error("渲染后端错误：{0}")]
    RenderBackend(String),

    #[error("请求无效：{0}")]
    InvalidRequest(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("解码错误：{0}")]
    Decode(String),

    /// 宿主图形系统的属性查询/设置失败。
    #[error("宿主错误：{0}")]
    Host(String),
}

/// 预计输出像素数超过阈值时的提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeWarning {
    pub expected_pixels: u64,
    pub threshold: u64,
}

impl fmt::Display for SizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "预计输出 {:.1} 百万像素（阈值 {:.1} 百万像素），导出可能较慢且占用大量内存",
            self.expected_pixels as f64 / 1_000_000.0,
            self.threshold as f64 / 1_000_000.0
        )
    }
}
