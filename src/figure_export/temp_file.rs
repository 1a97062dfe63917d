//! # 临时文件生命周期
//!
//! 两种渲染策略的中间文件（EPS / TIFF）都通过 `tempfile::TempPath` 管理：
//! 创建时在目标目录中独占新建空文件（不会跟随预先放置的同名文件或符号链接），
//! `Drop` 时删除。错误经 `?` 传播时守卫已先行析构，调用方拿到错误时不会残留中间文件。

use std::path::Path;

use tempfile::{Builder, TempPath};

use super::ExportError;

/// 在 `dir` 下新建一个以 `extension` 结尾的空临时文件。
pub(crate) fn scoped_temp_file(dir: &Path, extension: &str) -> Result<TempPath, ExportError> {
    let suffix = format!(".{}", extension);
    let file = Builder::new()
        .prefix("figraster_")
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(|e| {
            ExportError::FileSystem(format!("无法在 {} 创建临时文件：{}", dir.display(), e))
        })?;
    let path = file.into_temp_path();
    log::debug!("📄 临时文件：{}", path.display());
    Ok(path)
}
