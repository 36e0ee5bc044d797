//! 实体标识和管理
//!
//! 每个输出图元都是一个实体，实体通过图层ID归属到图层。

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 全局实体ID生成器，0 和 1 保留（空ID、0层）
static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(2);

/// 实体唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    /// 唯一ID
    pub id: u64,
}

impl EntityId {
    /// 创建新的实体ID
    pub fn new() -> Self {
        Self {
            id: ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// 空ID（无效）
    pub const NULL: EntityId = EntityId { id: 0 };

    /// 0层的固定ID，生成器不会分配
    pub const DEFAULT_LAYER: EntityId = EntityId { id: 1 };
}

/// CAD实体
///
/// 一个实体包含几何数据和所属图层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// 唯一标识符
    pub id: EntityId,

    /// 几何类型和数据
    pub geometry: crate::geometry::Geometry,

    /// 所属图层ID（空ID表示0层）
    pub layer_id: EntityId,
}

impl Entity {
    /// 创建新实体
    pub fn new(geometry: crate::geometry::Geometry) -> Self {
        Self {
            id: EntityId::new(),
            geometry,
            layer_id: EntityId::NULL,
        }
    }

    /// 使用指定的图层
    pub fn with_layer(mut self, layer_id: EntityId) -> Self {
        self.layer_id = layer_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Geometry, Point};

    #[test]
    fn test_entity_ids_are_unique() {
        let a = Entity::new(Geometry::Point(Point::new(0.0, 0.0, 0.0)));
        let b = Entity::new(Geometry::Point(Point::new(0.0, 0.0, 0.0)));

        assert_ne!(a.id, b.id);
        assert_eq!(a.layer_id, EntityId::NULL);

        let layered = b.with_layer(EntityId::DEFAULT_LAYER);
        assert_eq!(layered.layer_id, EntityId::DEFAULT_LAYER);
    }

    #[test]
    fn test_generated_ids_skip_reserved_values() {
        for _ in 0..16 {
            let id = EntityId::new();
            assert_ne!(id, EntityId::NULL);
            assert_ne!(id, EntityId::DEFAULT_LAYER);
        }
    }
}
