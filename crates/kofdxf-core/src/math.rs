//! 数学基础类型
//!
//! 基于 nalgebra 提供的向量和点类型的别名。测量数据始终是三维的。

use nalgebra as na;

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 3D向量类型
pub type Vector3 = na::Vector3<f64>;
