//! # 外部光栅化工具
//!
//! ## 设计思路
//!
//! 矢量策略依赖外部进程把 EPS 转为位图。`Rasterizer` 抽象出这一步，
//! 默认实现 `Ghostscript` 以 24 位真彩 TIFF 设备输出。
//!
//! ## 实现思路
//!
//! - 参数直接逐个传给 `Command`，路径中的空格无需转义。
//! - 进程无法启动（工具缺失）与非零退出都映射为 `ExportError::RenderBackend`，
//!   错误消息附带裁剪后的 stderr，便于诊断。

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{ExportConfig, ExportError};

const STDERR_EXCERPT_CHARS: usize = 512;

/// EPS → 位图 光栅化器。
pub trait Rasterizer {
    fn rasterize(&self, input: &Path, output: &Path, dpi: u32) -> Result<(), ExportError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn rasterize(&self, input: &Path, output: &Path, dpi: u32) -> Result<(), ExportError> {
        (**self).rasterize(input, output, dpi)
    }
}

/// Ghostscript 命令行光栅化器。
#[derive(Debug, Clone)]
pub struct Ghostscript {
    executable: PathBuf,
    font_path: Option<PathBuf>,
}

impl Ghostscript {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            font_path: None,
        }
    }

    pub fn with_font_path(mut self, font_path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(font_path.into());
        self
    }

    /// 按配置构建；未指定可执行文件时使用平台默认名。
    pub fn from_config(config: &ExportConfig) -> Self {
        let executable = config
            .ghostscript_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::default_executable()));
        Self {
            executable,
            font_path: config.font_path.clone(),
        }
    }

    fn default_executable() -> &'static str {
        if cfg!(windows) { "gswin64c" } else { "gs" }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// 构建命令行参数：裁剪模式、静默批处理、分辨率、输出设备、字体、输出与输入路径。
    pub(crate) fn arguments(&self, input: &Path, output: &Path, dpi: u32) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-dEPSCrop", "-q", "-dNOPAUSE", "-dBATCH"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(format!("-r{}", dpi).into());
        args.push("-sDEVICE=tiff24nc".into());

        if let Some(font_path) = &self.font_path {
            let mut arg = OsString::from("-sFONTPATH=");
            arg.push(font_path);
            args.push(arg);
        }

        let mut output_arg = OsString::from("-sOutputFile=");
        output_arg.push(output);
        args.push(output_arg);
        args.push(input.as_os_str().to_owned());
        args
    }
}

impl Rasterizer for Ghostscript {
    fn rasterize(&self, input: &Path, output: &Path, dpi: u32) -> Result<(), ExportError> {
        log::debug!(
            "🖨️ 调用 Ghostscript：{} -r{} {}",
            self.executable.display(),
            dpi,
            input.display()
        );

        let result = Command::new(&self.executable)
            .args(self.arguments(input, output, dpi))
            .output()
            .map_err(|e| {
                ExportError::RenderBackend(format!(
                    "无法启动 Ghostscript（{}）：{}",
                    self.executable.display(),
                    e
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let excerpt: String = stderr.trim().chars().take(STDERR_EXCERPT_CHARS).collect();
            return Err(ExportError::RenderBackend(format!(
                "Ghostscript 执行失败（{}）：{}",
                result.status, excerpt
            )));
        }

        Ok(())
    }
}
