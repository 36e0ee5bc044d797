//! 测量点与坐标映射
//!
//! 测量坐标系使用北(N)、东(E)、高程(Z)，绘图坐标系使用 X、Y、Z：
//! X = 东，Y = 北，Z = 高程。北坐标永远不会放到 X 轴上。

use crate::math::Point3;
use serde::{Deserialize, Serialize};

/// 将测量坐标映射为绘图坐标
#[inline]
pub fn survey_to_drawing(northing: f64, easting: f64, elevation: f64) -> Point3 {
    Point3::new(easting, northing, elevation)
}

/// 一条 KOF 点记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPoint {
    /// 点编码，保留原始文本（例如 `05`）
    pub code: String,
    /// 点号
    pub id: String,
    /// 北坐标（米）
    pub northing: f64,
    /// 东坐标（米）
    pub easting: f64,
    /// 高程（米）
    pub elevation: f64,
}

impl SurveyPoint {
    pub fn new(
        code: impl Into<String>,
        id: impl Into<String>,
        northing: f64,
        easting: f64,
        elevation: f64,
    ) -> Self {
        Self {
            code: code.into(),
            id: id.into(),
            northing,
            easting,
            elevation,
        }
    }

    /// 绘图 X（东）
    pub fn x(&self) -> f64 {
        self.easting
    }

    /// 绘图 Y（北）
    pub fn y(&self) -> f64 {
        self.northing
    }

    /// 绘图 Z（高程）
    pub fn z(&self) -> f64 {
        self.elevation
    }

    /// 绘图坐标系中的位置
    pub fn position(&self) -> Point3 {
        survey_to_drawing(self.northing, self.easting, self.elevation)
    }
}

/// 点集统计，用于在写文件前确认高程没有被压平到 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSummary {
    pub count: usize,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

impl PointSummary {
    /// 点集为空时返回 `None`
    pub fn from_points(points: &[SurveyPoint]) -> Option<Self> {
        let first = points.first()?;
        let (min_elevation, max_elevation) = points.iter().fold(
            (first.elevation, first.elevation),
            |(lo, hi), p| (lo.min(p.elevation), hi.max(p.elevation)),
        );
        Some(Self {
            count: points.len(),
            min_elevation,
            max_elevation,
        })
    }
}

impl std::fmt::Display for PointSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Points: {} | Z min/max: {:.3} / {:.3}",
            self.count, self.min_elevation, self.max_elevation
        )
    }
}
