//! 点标记配置
//!
//! 标记为"圆 + 十字"，直径 `d`（默认 0.5 m）。文字高度和偏移都由直径导出，
//! 对一次转换中的所有点统一生效。

use crate::error::KofError;
use crate::geometry::{Circle, Geometry, Line};
use crate::math::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 点和标记所在图层
pub const POINT_LAYER: &str = "PUNKTER";
/// 点号文字图层
pub const ID_LABEL_LAYER: &str = "TEKST_ID";
/// 高程文字图层
pub const ELEVATION_LABEL_LAYER: &str = "TEKST_Z";

/// 默认标记直径（米）
pub const DEFAULT_DIAMETER: f64 = 0.5;
/// 最小文字高度（米）
pub const MIN_TEXT_HEIGHT: f64 = 0.20;

/// 文字标注模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextMode {
    /// 点号和高程
    #[default]
    All,
    /// 只标点号
    Id,
    /// 只标高程
    Z,
    /// 不标注
    None,
}

impl TextMode {
    /// 是否标注点号
    pub fn labels_id(&self) -> bool {
        matches!(self, TextMode::All | TextMode::Id)
    }

    /// 是否标注高程
    pub fn labels_elevation(&self) -> bool {
        matches!(self, TextMode::All | TextMode::Z)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextMode::All => "ALL",
            TextMode::Id => "ID",
            TextMode::Z => "Z",
            TextMode::None => "NONE",
        }
    }
}

impl FromStr for TextMode {
    type Err = KofError;

    /// 不区分大小写，未知值直接报错
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(TextMode::All),
            "ID" => Ok(TextMode::Id),
            "Z" => Ok(TextMode::Z),
            "NONE" => Ok(TextMode::None),
            other => Err(KofError::MalformedConfig(format!(
                "unknown text mode '{other}', expected one of ALL, ID, Z, NONE"
            ))),
        }
    }
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 标记规格
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    diameter: f64,
    text_mode: TextMode,
}

impl MarkerSpec {
    /// 创建标记规格，直径必须为正的有限值
    pub fn new(diameter: f64, text_mode: TextMode) -> Result<Self, KofError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(KofError::InvalidDiameter(diameter));
        }
        Ok(Self {
            diameter,
            text_mode,
        })
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// 文字高度，不小于 0.2 m
    pub fn text_height(&self) -> f64 {
        MIN_TEXT_HEIGHT.max(self.diameter * 0.4)
    }

    /// 文字相对点位的偏移
    pub fn label_offset(&self) -> f64 {
        self.diameter * 0.8
    }

    /// 点号文字插入点（右上）
    pub fn id_label_position(&self, at: &Point3) -> Point3 {
        let off = self.label_offset();
        *at + Vector3::new(off, off, 0.0)
    }

    /// 高程文字插入点（右下）
    pub fn elevation_label_position(&self, at: &Point3) -> Point3 {
        let off = self.label_offset();
        *at + Vector3::new(off, -off, 0.0)
    }

    /// 标记图形：圆 + 平行于 X 轴的横线 + 平行于 Y 轴的竖线，全部与点同高
    pub fn glyph(&self, at: &Point3) -> [Geometry; 3] {
        let r = self.radius();
        let dx = Vector3::new(r, 0.0, 0.0);
        let dy = Vector3::new(0.0, r, 0.0);
        [
            Geometry::Circle(Circle::new(*at, r)),
            Geometry::Line(Line::new(*at - dx, *at + dx)),
            Geometry::Line(Line::new(*at - dy, *at + dy)),
        ]
    }
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            text_mode: TextMode::All,
        }
    }
}
