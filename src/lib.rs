//! # figure-raster — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  宿主图形系统 (FigureHost)     外部光栅化工具 (Rasterizer) │
//! └───────┬──────────────────────────────┬───────────────────┘
//!         ↓                              ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │  figure_export                                           │
//! │   ├─ 渲染策略：vector (EPS → TIFF) / direct (捕获 ⇢ 打印)  │
//! │   ├─ border     边框扫描 + 中位数背景色                   │
//! │   ├─ reconcile  尺寸只缩不扩                              │
//! │   └─ handler    FigureExporter 编排 + 阶段耗时日志        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ ExportOutput { raster, background, size_warning }
//! ┌──────────────────────────────────────────────────────────┐
//! │  cli / eps_figure / settings / storage  命令行前端        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`figure_export`] | 渲染适配、边框归一化、尺寸校正 |
//! | [`error`] | 应用级错误 `AppError` |
//! | [`eps_figure`] | 把 EPS 文件包装为 `FigureHost` |
//! | [`settings`] | JSON 导出配置加载 |
//! | [`storage`] | 结果图像写出 |
//! | [`cli`] | 命令行参数与主流程 |

pub mod cli;
pub mod eps_figure;
pub mod error;
pub mod figure_export;
pub mod settings;
pub mod storage;
