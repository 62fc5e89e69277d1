#![cfg(target_arch = "wasm32")]

use catchup_sketch::wasm::SketchSession;
use catchup_sketch::wasm_ready;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn ready_probe_reports_true() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn paint_and_state_round_trip() {
    let mut session = SketchSession::new(5);
    session.paint(5, 5).unwrap();
    session.paint(5, 6).unwrap();
    session.set_brush("white").unwrap();
    session.paint(8, 3).unwrap();

    let state = session.state().unwrap();
    let black = Reflect::get(&state, &JsValue::from_str("black_score")).unwrap();
    let black: Vec<u32> = serde_wasm_bindgen::from_value(black).unwrap();
    assert_eq!(black, vec![2]);

    assert_eq!(session.score_line("black").unwrap(), "2");
    assert_eq!(session.score_line("white").unwrap(), "1");
}

#[wasm_bindgen_test]
fn out_of_bounds_paint_is_a_js_error() {
    let mut session = SketchSession::new(5);
    assert!(session.paint(0, 0).is_err());
}
