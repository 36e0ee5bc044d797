//! 在新进程中第一次生成图层时，标记实体必须落在 PUNKTER 上，不能被当成 0 层。
//! 本文件只放一个测试，保证它是进程里第一个分配 ID 的调用。

use kofdxf_core::marker::{MarkerSpec, TextMode, POINT_LAYER};
use kofdxf_core::survey::SurveyPoint;
use kofdxf_file::{dxf_io, emit};

#[test]
fn first_layer_in_fresh_process_is_not_layer_zero() {
    let points = [SurveyPoint::new("05", "P657", 1216203.852, 120379.229, 117.036)];
    let document = emit(&points, &MarkerSpec::new(0.5, TextMode::None).unwrap());

    assert_eq!(document.entities_on_layer(POINT_LAYER).count(), 4);
    assert_eq!(document.entities_on_layer("0").count(), 0);

    let drawing = dxf_io::to_drawing(&document);
    assert!(drawing.entities().all(|e| e.common.layer == POINT_LAYER));
}
