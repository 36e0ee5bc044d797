//! CAD文档数据模型
//!
//! 实体按添加顺序保存，导出时顺序不变。

use kofdxf_core::entity::{Entity, EntityId};
use kofdxf_core::layer::LayerManager;
use kofdxf_core::units::Unit;

/// 文档元数据
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    /// 绘图单位，同时决定 `$INSUNITS` 和 `$MEASUREMENT`
    pub units: Unit,
}

/// CAD文档
#[derive(Debug, Default)]
pub struct Document {
    /// 元数据
    pub metadata: DocumentMetadata,

    /// 所有实体
    entities: Vec<Entity>,

    /// 图层管理器
    pub layers: LayerManager,
}

impl Document {
    /// 创建新文档
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加实体
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// 获取所有实体
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// 获取实体数量
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// 指定类型的实体数量（类型名见 `Geometry::type_name`）
    pub fn count_by_type(&self, type_name: &str) -> usize {
        self.entities
            .iter()
            .filter(|e| e.geometry.type_name() == type_name)
            .count()
    }

    /// 指定图层上的实体
    pub fn entities_on_layer<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities
            .iter()
            .filter(move |e| self.layers.layer_name(e.layer_id) == name)
    }
}
