//! KOFDXF 核心
//!
//! 提供三维图元、图层、单位，以及 KOF 测量记录的解析与坐标映射。
//!
//! # 架构设计
//!
//! - `SurveyPoint`: 从 KOF 行解析出的测量点（北、东、高程）
//! - `Geometry`: 绘图图元（点、线、圆、文本），全部为真实三维坐标
//! - `MarkerSpec`: 标记尺寸与文字模式，整个运行期间不可变
//!
//! # 示例
//!
//! ```rust
//! use kofdxf_core::prelude::*;
//!
//! let point = parse_line("05 P657 (0) 1216203.852 120379.229 117.036").unwrap();
//!
//! // 测量坐标：X = 东，Y = 北
//! assert_eq!(point.position(), Point3::new(120379.229, 1216203.852, 117.036));
//! ```

pub mod entity;
pub mod error;
pub mod geometry;
pub mod kof;
pub mod layer;
pub mod marker;
pub mod math;
pub mod survey;
pub mod units;

pub use error::KofError;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::{Entity, EntityId};
    pub use crate::error::KofError;
    pub use crate::geometry::{Circle, Geometry, Line, Point, Text};
    pub use crate::kof::{parse_kof, parse_line, parse_points};
    pub use crate::layer::{Layer, LayerManager};
    pub use crate::marker::{MarkerSpec, TextMode};
    pub use crate::math::{Point3, Vector3};
    pub use crate::survey::{survey_to_drawing, PointSummary, SurveyPoint};
    pub use crate::units::Unit;
}
