//! 单位系统
//!
//! 测量数据只使用米。DXF 导出时 `$INSUNITS` 和 `$MEASUREMENT` 都由同一个
//! `Unit` 值导出，保证两者始终一致。

use serde::{Deserialize, Serialize};

/// 绘图单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    /// 米
    #[default]
    Meter,
}
