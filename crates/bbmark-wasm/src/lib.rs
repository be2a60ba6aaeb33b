use serde::Serialize;
use wasm_bindgen::prelude::*;

use bbmark_core::{ConvertedBlock, SourceMap};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResult {
    bbcode: String,
    blocks: Vec<JsBlock>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsBlock {
    kind: &'static str,
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSampleOutcome {
    name: &'static str,
    passed: bool,
    expected: &'static str,
    actual: String,
}

#[wasm_bindgen]
pub fn convert(source: &str) -> String {
    bbmark_core::convert(source)
}

#[wasm_bindgen]
pub fn convert_with_blocks(source: &str) -> Result<JsValue, JsValue> {
    let conversion = bbmark_core::convert_blocks(source);
    let source_map = SourceMap::new(source);
    let result = ConvertResult {
        blocks: conversion
            .blocks
            .iter()
            .map(|block| js_block(block, &source_map))
            .collect(),
        bbcode: conversion.bbcode,
    };
    to_js(&result)
}

#[wasm_bindgen]
pub fn self_check() -> Result<JsValue, JsValue> {
    let outcomes: Vec<JsSampleOutcome> = bbmark_core::samples()
        .iter()
        .map(|sample| {
            let actual = bbmark_core::convert(sample.markdown);
            JsSampleOutcome {
                name: sample.name,
                passed: actual == sample.bbcode,
                expected: sample.bbcode,
                actual,
            }
        })
        .collect();
    to_js(&outcomes)
}

fn js_block(block: &ConvertedBlock, source_map: &SourceMap) -> JsBlock {
    let range = source_map.range(block.span);
    JsBlock {
        kind: block.kind.as_str(),
        start_line: range.start.line,
        start_col: range.start.character,
        end_line: range.end.line,
        end_col: range.end.character,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
