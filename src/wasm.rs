//! WebAssembly bindings (feature `wasm`).

use wasm_bindgen::prelude::*;

use crate::engine::{Engine, RenderConfig};
use crate::rule_set::RuleSet;

fn engine_for(rule_set: &str) -> Result<Engine, JsValue> {
    let rule_set: RuleSet = rule_set
        .parse()
        .map_err(|e: crate::error::RuleSetError| JsValue::from_str(&e.to_string()))?;
    Ok(Engine::for_rule_set(rule_set))
}

/// Labels a single number under the named rule set.
#[wasm_bindgen]
pub fn label(rule_set: &str, number: i64) -> Result<String, JsValue> {
    Ok(engine_for(rule_set)?.text(number))
}

/// Labels `start..=end` and returns a JS array of strings.
#[wasm_bindgen]
pub fn render(rule_set: &str, start: i64, end: i64) -> Result<JsValue, JsValue> {
    let config = RenderConfig::default().with_range(start, end);
    let labels = engine_for(rule_set)?
        .render(&config)
        .map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&labels).map_err(JsValue::from)
}
