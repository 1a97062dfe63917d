//! # 属性临时改写守卫
//!
//! ## 设计思路
//!
//! 擦除模式、打印版面、“显示隐藏句柄”都是宿主的进程级共享状态。
//! 导出期间必须“快照 → 改写 → 捕获 → 无条件恢复”，且恢复发生在错误向上传播之前。
//!
//! ## 实现思路
//!
//! `ScopedOverride` 采用 RAII 模式：构造时记录旧值并写入新值，`Drop` 时写回旧值。
//! 提前 `return`、`?` 传播、panic 展开都会经过 `Drop`，调用点不需要逐个补恢复逻辑。
//! 析构中无法传播错误，恢复失败只记录 `error` 日志。

use super::ExportError;

type Restore<'a, T> = Box<dyn FnMut(T) -> Result<(), ExportError> + 'a>;

/// 单个属性的临时改写守卫。
///
/// # 示例
/// ```rust,ignore
/// let _hidden = ScopedOverride::apply("ShowHiddenHandles", host.show_hidden_handles()?, true, |v| {
///     host.set_show_hidden_handles(v)
/// })?;
/// // 守卫离开作用域时自动恢复旧值
/// ```
pub struct ScopedOverride<'a, T> {
    label: &'static str,
    original: Option<T>,
    restore: Restore<'a, T>,
}

impl<'a, T> ScopedOverride<'a, T> {
    /// 写入 `replacement` 并返回守卫；写入失败时不创建守卫，属性保持原值。
    pub fn apply<F>(
        label: &'static str,
        original: T,
        replacement: T,
        mut set: F,
    ) -> Result<Self, ExportError>
    where
        F: FnMut(T) -> Result<(), ExportError> + 'a,
    {
        set(replacement)?;
        Ok(Self {
            label,
            original: Some(original),
            restore: Box::new(set),
        })
    }
}

impl<T> Drop for ScopedOverride<'_, T> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            if let Err(err) = (self.restore)(original) {
                log::error!("❌ 恢复属性 {} 失败：{}", self.label, err);
            }
        }
    }
}
