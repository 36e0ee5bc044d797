//! 标记生成
//!
//! 为每个测量点生成：
//! 1. 一个真实三维的点实体（方便下游工具直接查询高程）
//! 2. 圆 + 十字标记，与点同高，不压平到 Z=0
//! 3. 按文字模式生成点号文字和高程文字
//!
//! 单位和图层只在创建时设置一次。

use crate::document::Document;
use kofdxf_core::entity::{Entity, EntityId};
use kofdxf_core::geometry::{Geometry, Point, Text};
use kofdxf_core::marker::{MarkerSpec, ELEVATION_LABEL_LAYER, ID_LABEL_LAYER, POINT_LAYER};
use kofdxf_core::survey::SurveyPoint;
use kofdxf_core::units::Unit;
use tracing::{debug, info};

/// 标记生成器，生成期间独占文档
pub struct Emitter<'a> {
    spec: &'a MarkerSpec,
    document: Document,
    point_layer: EntityId,
    id_layer: EntityId,
    elevation_layer: EntityId,
}

impl<'a> Emitter<'a> {
    /// 创建生成器：设置单位为米，并确保三个图层存在
    pub fn new(spec: &'a MarkerSpec) -> Self {
        Self::with_document(spec, Document::new())
    }

    /// 在已有文档上继续生成
    pub fn with_document(spec: &'a MarkerSpec, mut document: Document) -> Self {
        document.metadata.units = Unit::Meter;
        let point_layer = document.layers.ensure_layer(POINT_LAYER);
        let id_layer = document.layers.ensure_layer(ID_LABEL_LAYER);
        let elevation_layer = document.layers.ensure_layer(ELEVATION_LABEL_LAYER);

        debug!(
            diameter = spec.diameter(),
            text_mode = %spec.text_mode(),
            "emitter ready"
        );

        Self {
            spec,
            document,
            point_layer,
            id_layer,
            elevation_layer,
        }
    }

    /// 生成单个点的全部图元
    pub fn emit_point(&mut self, point: &SurveyPoint) {
        let at = point.position();

        self.add(Geometry::Point(Point::from_point3(at)), self.point_layer);

        for geometry in self.spec.glyph(&at) {
            self.add(geometry, self.point_layer);
        }

        let mode = self.spec.text_mode();
        let height = self.spec.text_height();

        if mode.labels_id() {
            let text = Text::new(self.spec.id_label_position(&at), point.id.clone(), height);
            self.add(Geometry::Text(text), self.id_layer);
        }

        if mode.labels_elevation() {
            let text = Text::new(
                self.spec.elevation_label_position(&at),
                format!("{:.3}", point.elevation),
                height,
            );
            self.add(Geometry::Text(text), self.elevation_layer);
        }
    }

    /// 结束生成，交出文档
    pub fn finish(self) -> Document {
        self.document
    }

    fn add(&mut self, geometry: Geometry, layer: EntityId) {
        self.document
            .add_entity(Entity::new(geometry).with_layer(layer));
    }
}

/// 按输入顺序为所有点生成图元
pub fn emit(points: &[SurveyPoint], spec: &MarkerSpec) -> Document {
    let mut emitter = Emitter::new(spec);
    for point in points {
        emitter.emit_point(point);
    }
    let document = emitter.finish();

    info!(
        points = points.len(),
        entities = document.entity_count(),
        "emitted marker drawing"
    );
    document
}
