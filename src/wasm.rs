use wasm_bindgen::prelude::*;

use crate::board::Owner;
use crate::sketch::Sketch;

/// JS-facing sketch session.
#[wasm_bindgen]
pub struct SketchSession {
    inner: Sketch,
}

#[wasm_bindgen]
impl SketchSession {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: u8) -> SketchSession {
        SketchSession {
            inner: Sketch::new(radius),
        }
    }

    /// Side length of the backing square grid.
    pub fn side(&self) -> u32 {
        self.inner.board().shape().side() as u32
    }

    pub fn brush(&self) -> String {
        self.inner.brush().name().to_string()
    }

    pub fn set_brush(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.set_brush(name).map_err(|err| JsValue::from_str(&err))
    }

    pub fn paint(&mut self, row: i32, col: i32) -> Result<(), JsValue> {
        self.inner.paint(row, col).map_err(|err| JsValue::from_str(&err))
    }

    /// The valid cells, as `[{row, col}, ...]`.
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.cells()).map_err(JsValue::from)
    }

    /// Full board snapshot with freshly recomputed scores.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(JsValue::from)
    }

    /// Score widget text for `"black"` or `"white"`.
    pub fn score_line(&self, player: &str) -> Result<String, JsValue> {
        let owner = Owner::parse(player)
            .ok_or_else(|| JsValue::from_str(&format!("unknown player name: {player}")))?;
        Ok(self.inner.score_line(owner))
    }
}
