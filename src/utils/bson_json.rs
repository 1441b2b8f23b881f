//! # BSON → JSON 변환
//!
//! 해석하지 않고 그대로 전달하는 문서(`spot`, `countries`)를 JSON으로 변환합니다.
//! ObjectId는 16진수 문자열로, 나머지 값은 relaxed extended JSON 형식으로 표현됩니다.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// BSON 문서를 JSON 객체로 변환합니다.
pub fn document_to_json(document: Document) -> Value {
    let map: Map<String, Value> = document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();

    Value::Object(map)
}

/// 단일 BSON 값을 JSON 값으로 변환합니다.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
