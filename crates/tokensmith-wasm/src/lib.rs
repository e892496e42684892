//! WASM bindings for the tokensmith compiler.
//!
//! Exposes `compile()` and `compileTree()` to JavaScript via wasm-bindgen.
//! Both return a JS object `{ scss, mixins }` or throw on error.

use tokensmith_mixin::{CompilerOutput, FormatOptions};
use wasm_bindgen::prelude::*;

/// Compile a JSON token tree (as text) to SCSS mixins.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<JsValue, JsError> {
    let output = compile_source(source).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(output)
}

/// Compile a token tree given as a plain JS object.
#[wasm_bindgen(js_name = compileTree)]
pub fn compile_tree(tree: JsValue) -> Result<JsValue, JsError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    let tree = tokensmith_tree::load_value(&value).map_err(|e| JsError::new(&e.to_string()))?;
    let tokens = tokensmith_tree::tokens(&tree);
    to_js(tokensmith_mixin::compile(&tokens, &FormatOptions::default()))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn compile_source(source: &str) -> Result<CompilerOutput, tokensmith_tree::LoadError> {
    let tree = tokensmith_tree::load_str(source)?;
    let tokens = tokensmith_tree::tokens(&tree);
    Ok(tokensmith_mixin::compile(&tokens, &FormatOptions::default()))
}

fn to_js(output: CompilerOutput) -> Result<JsValue, JsError> {
    let mixins = js_sys::Array::new();
    for name in &output.mixins {
        mixins.push(&JsValue::from_str(name));
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"scss".into(), &output.scss.into())
        .map_err(|_| JsError::new("Failed to set scss property"))?;
    js_sys::Reflect::set(&js_obj, &"mixins".into(), &mixins.into())
        .map_err(|_| JsError::new("Failed to set mixins property"))?;

    Ok(js_obj.into())
}
