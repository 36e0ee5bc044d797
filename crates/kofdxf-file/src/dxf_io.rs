//! DXF文件导出
//!
//! 导出时：
//! - 文件版本 R2010
//! - `$INSUNITS` 和 `$MEASUREMENT` 都由文档单位导出，保持一致
//! - 缺少的图层才会新建
//! - 实体按文档顺序写入，保留全部三维坐标
//!
//! 整个图纸先序列化到内存，成功后才写文件，失败时不会留下半个文件。

use crate::document::Document;
use crate::error::FileError;
use kofdxf_core::geometry::Geometry;
use kofdxf_core::math::Point3;
use kofdxf_core::units::Unit;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 导出到DXF文件
pub fn export(document: &Document, path: &Path) -> Result<(), FileError> {
    let mut buffer = Vec::new();
    write(document, &mut buffer)?;
    std::fs::write(path, &buffer)?;

    info!(
        path = %path.display(),
        entities = document.entity_count(),
        bytes = buffer.len(),
        "wrote DXF"
    );
    Ok(())
}

/// 把文档写入任意输出流
pub fn write<W: Write>(document: &Document, writer: &mut W) -> Result<(), FileError> {
    to_drawing(document)
        .save(writer)
        .map_err(|e| FileError::Dxf(e.to_string()))
}

/// 构建 `dxf::Drawing`
pub fn to_drawing(document: &Document) -> dxf::Drawing {
    let mut drawing = dxf::Drawing::new();
    drawing.header.version = dxf::enums::AcadVersion::R2010;

    // 单位：两个字段来自同一个值
    let (units, measurement) = unit_to_dxf(document.metadata.units);
    drawing.header.default_drawing_units = units;
    drawing.header.drawing_units = measurement;

    // 导出图层
    for layer in document.layers.all_layers() {
        if drawing.layers().any(|l| l.name == layer.name) {
            continue;
        }
        let mut dxf_layer = dxf::tables::Layer::default();
        dxf_layer.name = layer.name.clone();
        drawing.add_layer(dxf_layer);
    }

    // 导出模型空间实体
    for entity in document.all_entities() {
        let mut dxf_entity = dxf::entities::Entity::new(convert_to_dxf_entity(&entity.geometry));
        dxf_entity.common.layer = document.layers.layer_name(entity.layer_id).to_string();
        drawing.add_entity(dxf_entity);
    }

    drawing
}

fn to_dxf_point(p: &Point3) -> dxf::Point {
    dxf::Point::new(p.x, p.y, p.z)
}

/// 将图元转换为DXF实体
fn convert_to_dxf_entity(geometry: &Geometry) -> dxf::entities::EntityType {
    match geometry {
        Geometry::Point(point) => {
            let mut dxf_point = dxf::entities::ModelPoint::default();
            dxf_point.location = to_dxf_point(&point.position);
            dxf::entities::EntityType::ModelPoint(dxf_point)
        }

        Geometry::Line(line) => {
            let mut dxf_line = dxf::entities::Line::default();
            dxf_line.p1 = to_dxf_point(&line.start);
            dxf_line.p2 = to_dxf_point(&line.end);
            dxf::entities::EntityType::Line(dxf_line)
        }

        Geometry::Circle(circle) => {
            let mut dxf_circle = dxf::entities::Circle::default();
            dxf_circle.center = to_dxf_point(&circle.center);
            dxf_circle.radius = circle.radius;
            dxf::entities::EntityType::Circle(dxf_circle)
        }

        Geometry::Text(text) => {
            let mut dxf_text = dxf::entities::Text::default();
            dxf_text.location = to_dxf_point(&text.position);
            dxf_text.text_height = text.height;
            dxf_text.value = text.content.clone();
            dxf::entities::EntityType::Text(dxf_text)
        }
    }
}

/// `$INSUNITS` 与 `$MEASUREMENT`
fn unit_to_dxf(unit: Unit) -> (dxf::enums::Units, dxf::enums::DrawingUnits) {
    match unit {
        Unit::Meter => (dxf::enums::Units::Meters, dxf::enums::DrawingUnits::Metric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::emit;
    use assert_fs::prelude::*;
    use kofdxf_core::kof::parse_kof;
    use kofdxf_core::marker::{
        MarkerSpec, TextMode, ELEVATION_LABEL_LAYER, ID_LABEL_LAYER, POINT_LAYER,
    };

    const SAMPLE: &str = "\
KOF header line
05 P657 (0)             1216203.852  120379.229  117.036
05 P658 (0)             1216205.000  120380.500  -0.125
";

    fn sample_document(mode: TextMode) -> Document {
        let points = parse_kof(SAMPLE).unwrap();
        emit(&points, &MarkerSpec::new(0.5, mode).unwrap())
    }

    fn reload(document: &Document) -> dxf::Drawing {
        let mut buffer = Vec::new();
        write(document, &mut buffer).unwrap();
        dxf::Drawing::load(&mut buffer.as_slice()).unwrap()
    }

    fn count(drawing: &dxf::Drawing, pred: impl Fn(&dxf::entities::EntityType) -> bool) -> usize {
        drawing.entities().filter(|e| pred(&e.specific)).count()
    }

    #[test]
    fn test_header_declares_meters() {
        let drawing = reload(&sample_document(TextMode::All));

        assert_eq!(
            drawing.header.default_drawing_units,
            dxf::enums::Units::Meters
        );
        assert_eq!(
            drawing.header.drawing_units,
            dxf::enums::DrawingUnits::Metric
        );
    }

    #[test]
    fn test_layers_are_written_once() {
        let drawing = reload(&sample_document(TextMode::None));

        for name in ["0", POINT_LAYER, ID_LABEL_LAYER, ELEVATION_LABEL_LAYER] {
            assert_eq!(
                drawing.layers().filter(|l| l.name == name).count(),
                1,
                "layer {name}"
            );
        }
    }

    #[test]
    fn test_entities_keep_true_3d_coordinates() {
        use dxf::entities::EntityType;
        let drawing = reload(&sample_document(TextMode::All));

        assert_eq!(count(&drawing, |e| matches!(e, EntityType::ModelPoint(_))), 2);
        assert_eq!(count(&drawing, |e| matches!(e, EntityType::Circle(_))), 2);
        assert_eq!(count(&drawing, |e| matches!(e, EntityType::Line(_))), 4);
        assert_eq!(count(&drawing, |e| matches!(e, EntityType::Text(_))), 4);

        let first = drawing.entities().next().unwrap();
        assert_eq!(first.common.layer, POINT_LAYER);
        let EntityType::ModelPoint(point) = &first.specific else {
            panic!("first entity must be a POINT");
        };
        assert_eq!(point.location.x, 120379.229);
        assert_eq!(point.location.y, 1216203.852);
        assert_eq!(point.location.z, 117.036);

        for entity in drawing.entities() {
            match &entity.specific {
                EntityType::Circle(c) => {
                    assert_eq!(c.radius, 0.25);
                    assert!(c.center.z == 117.036 || c.center.z == -0.125);
                }
                EntityType::Line(l) => {
                    assert_eq!(l.p1.z, l.p2.z);
                    assert_ne!(l.p1.z, 0.0);
                }
                EntityType::Text(t) if entity.common.layer == ELEVATION_LABEL_LAYER => {
                    assert!(t.value == "117.036" || t.value == "-0.125");
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_export_writes_loadable_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let output = dir.child("points.dxf");

        let document = sample_document(TextMode::Id);
        export(&document, output.path()).unwrap();
        output.assert(predicates::path::exists());

        let loaded = dxf::Drawing::load_file(output.path()).unwrap();
        assert_eq!(loaded.entities().count(), document.entity_count());
        assert_eq!(
            loaded
                .entities()
                .filter(|e| e.common.layer == ID_LABEL_LAYER)
                .count(),
            2
        );
        assert!(loaded.layers().any(|l| l.name == ELEVATION_LABEL_LAYER));
        dir.close().unwrap();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let output = dir.child("missing").child("points.dxf");

        let result = export(&sample_document(TextMode::All), output.path());
        assert!(matches!(result, Err(FileError::Io(_))));
        output.assert(predicates::path::missing());
    }
}
