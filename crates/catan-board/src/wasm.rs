//! WebAssembly bindings for the board renderer.
//!
//! This module exposes SVG rendering to JavaScript through wasm-bindgen.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::config::RenderConfig;
#[cfg(feature = "wasm")]
use crate::model::GameState;
#[cfg(feature = "wasm")]
use crate::sample::sample_game;
#[cfg(feature = "wasm")]
use crate::svg::render_game_svg;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a game-state snapshot (JSON) to SVG markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = renderGameSvg)]
pub fn render_game_svg_json(state_json: &str) -> Result<String, JsValue> {
    let state = GameState::from_json(state_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid game state: {}", e)))?;
    render_game_svg(&state, &RenderConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Render failed: {}", e)))
}

/// The built-in sample game as JSON
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = sampleGameJson)]
pub fn sample_game_json() -> String {
    sample_game()
        .to_json_pretty()
        .unwrap_or_else(|_| "{}".to_string())
}

/// SVG markup for the built-in sample game
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = renderSampleSvg)]
pub fn render_sample_svg() -> Result<String, JsValue> {
    render_game_svg(&sample_game(), &RenderConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Render failed: {}", e)))
}
