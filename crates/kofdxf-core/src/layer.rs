//! 图层管理
//!
//! 图层是CAD中组织实体的重要方式。测量点、点号文字和高程文字分别放在各自的图层上。

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// 图层定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// 图层ID
    pub id: EntityId,

    /// 图层名称
    pub name: String,
}

impl Layer {
    /// 创建新图层
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }

    /// 默认图层（0层）
    pub fn default_layer() -> Self {
        Self {
            id: EntityId::DEFAULT_LAYER,
            name: "0".to_string(),
        }
    }
}

/// 图层管理器
///
/// 图层按创建顺序保存，0层始终存在。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerManager {
    layers: Vec<Layer>,
}

impl LayerManager {
    /// 创建新的图层管理器
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::default_layer()],
        }
    }

    /// 获取图层ID，不存在时创建
    pub fn ensure_layer(&mut self, name: &str) -> EntityId {
        if let Some(layer) = self.get_layer(name) {
            return layer.id;
        }
        let layer = Layer::new(name);
        let id = layer.id;
        self.layers.push(layer);
        id
    }

    /// 是否存在指定名称的图层
    pub fn contains(&self, name: &str) -> bool {
        self.get_layer(name).is_some()
    }

    /// 获取图层（按名称）
    pub fn get_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// 获取图层名称，空ID或未知ID返回0层
    pub fn layer_name(&self, id: EntityId) -> &str {
        self.layers
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.name.as_str())
            .unwrap_or("0")
    }

    /// 获取所有图层
    pub fn all_layers(&self) -> &[Layer] {
        &self.layers
    }

    /// 图层数量
    pub fn count(&self) -> usize {
        self.layers.len()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}
