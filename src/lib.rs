use wasm_bindgen::prelude::*;

pub mod board;
pub mod score;
pub mod shape;
pub mod sketch;
pub mod types;
pub mod wasm;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
