//! KOF文件读取

use crate::error::FileError;
use kofdxf_core::kof;
use kofdxf_core::survey::SurveyPoint;
use std::path::Path;
use tracing::info;

/// 读取 KOF 文件中的全部点记录
///
/// 无效字节被替换后继续解析；一个点都没有时返回 `NoPointsParsed`。
pub fn load_points(path: &Path) -> Result<Vec<SurveyPoint>, FileError> {
    let bytes = std::fs::read(path)?;
    let points = kof::parse_kof(&kof::decode(&bytes))?;

    info!(path = %path.display(), points = points.len(), "loaded KOF file");
    Ok(points)
}
