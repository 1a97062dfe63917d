//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `FigureExporter` 只负责流程编排与配置管理，不关心宿主与外部工具的具体实现。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 构建 `RenderSpec` 与 `ExpectedExtent`，超大输出给出提示
//! 3. 按策略渲染（矢量 / 直接捕获）
//! 4. 仅矢量策略执行边框归一化
//! 5. 尺寸校正
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ExportConfig>>` 支持两次导出之间调整参数。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `render/normalize/reconcile/total` 阶段耗时，便于性能诊断。

use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::direct::DirectCaptureRenderer;
use super::renderer::FigureRenderer;
use super::vector::VectorRenderer;
use super::{
    normalize_border, reconcile_dimensions, BackgroundColor, ExpectedExtent, ExportConfig,
    ExportError, FigureHandle, FigureHost, Ghostscript, RasterImage, Rasterizer, RenderSpec,
    RenderStrategy, SizeWarning,
};

/// 一次成功导出的结果。
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub raster: RasterImage,
    pub background: BackgroundColor,
    /// 预计输出过大时的提示（已记录 `warn` 日志）。
    pub size_warning: Option<SizeWarning>,
}

/// 图形导出器。
pub struct FigureExporter<'h, H: FigureHost + ?Sized> {
    host: &'h H,
    config: Arc<RwLock<ExportConfig>>,
    rasterizer: Option<Box<dyn Rasterizer + 'h>>,
}

impl<'h, H: FigureHost + ?Sized> FigureExporter<'h, H> {
    /// 根据宿主与初始配置创建导出器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use figure_raster::figure_export::{ExportConfig, FigureExporter, FigureHandle, RenderStrategy};
    ///
    /// let exporter = FigureExporter::new(&host, ExportConfig::default())?;
    /// let output = exporter.export(FigureHandle(1), 2.0, RenderStrategy::Vector)?;
    /// # Ok::<(), figure_raster::figure_export::ExportError>(())
    /// ```
    pub fn new(host: &'h H, config: ExportConfig) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self {
            host,
            config: Arc::new(RwLock::new(config)),
            rasterizer: None,
        })
    }

    /// 替换矢量策略使用的光栅化器（默认按配置构建 Ghostscript）。
    pub fn with_rasterizer(mut self, rasterizer: impl Rasterizer + 'h) -> Self {
        self.rasterizer = Some(Box::new(rasterizer));
        self
    }

    /// 获取配置快照。
    pub fn config_snapshot(&self) -> Result<ExportConfig, ExportError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| ExportError::InvalidRequest("配置读取锁已中毒".to_string()))
    }

    /// 校验并替换配置，下一次导出生效。
    pub fn set_config(&self, config: ExportConfig) -> Result<(), ExportError> {
        config.validate()?;
        let mut current = self
            .config
            .write()
            .map_err(|_| ExportError::InvalidRequest("配置写入锁已中毒".to_string()))?;
        *current = config;
        Ok(())
    }

    /// 预计像素数超过阈值时返回提示。
    pub fn check_output_size(expected: ExpectedExtent, config: &ExportConfig) -> Option<SizeWarning> {
        let expected_pixels = expected.pixel_count();
        (expected_pixels > config.large_output_pixel_threshold).then_some(SizeWarning {
            expected_pixels,
            threshold: config.large_output_pixel_threshold,
        })
    }

    /// 处理主入口：渲染、归一化、校正。
    pub fn export(
        &self,
        figure: FigureHandle,
        scale: f64,
        strategy: RenderStrategy,
    ) -> Result<ExportOutput, ExportError> {
        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let host_dpi = self.host.screen_dpi()?;
        let spec = RenderSpec::new(figure, scale, strategy, host_dpi, config.screen_dpi_override)?;

        let (logical_width, logical_height) = self.host.logical_size(figure)?;
        let expected = spec.expected_extent(logical_width, logical_height);
        let size_warning = Self::check_output_size(expected, &config);
        if let Some(warning) = &size_warning {
            log::warn!("⚠️ {}", warning);
        }

        let render_start = Instant::now();
        let frame = self.render(&spec, &config)?;
        let render_elapsed = render_start.elapsed();

        let normalize_start = Instant::now();
        let mut raster = frame.raster;
        let background = match strategy {
            RenderStrategy::Vector => normalize_border(&mut raster, frame.declared).background,
            RenderStrategy::Direct(_) => frame.background,
        };
        let normalize_elapsed = normalize_start.elapsed();

        let reconcile_start = Instant::now();
        let raster = reconcile_dimensions(raster, expected, &spec);
        let reconcile_elapsed = reconcile_start.elapsed();

        log::info!(
            "✅ 图形导出完成 - 策略: {} 尺寸: {}x{} @ {} DPI render={}ms normalize={}ms reconcile={}ms total={}ms",
            strategy.as_str(),
            raster.width(),
            raster.height(),
            spec.dpi,
            render_elapsed.as_millis(),
            normalize_elapsed.as_millis(),
            reconcile_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(ExportOutput {
            raster,
            background,
            size_warning,
        })
    }

    fn render(
        &self,
        spec: &RenderSpec,
        config: &ExportConfig,
    ) -> Result<super::renderer::RenderedFrame, ExportError> {
        let temp_dir = config.resolved_temp_dir();
        match spec.strategy {
            RenderStrategy::Vector => {
                let default_rasterizer;
                let rasterizer: &dyn Rasterizer = match &self.rasterizer {
                    Some(custom) => custom.as_ref(),
                    None => {
                        default_rasterizer = Ghostscript::from_config(config);
                        &default_rasterizer
                    }
                };
                VectorRenderer::new(self.host, rasterizer, temp_dir).render(spec)
            }
            RenderStrategy::Direct(_) => {
                DirectCaptureRenderer::new(self.host, temp_dir, config.enable_fast_capture)
                    .render(spec)
            }
        }
    }
}
