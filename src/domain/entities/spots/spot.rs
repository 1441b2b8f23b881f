//! Spot Entity Implementation
//!
//! `spot` 컬렉션에 저장되는 관광지 문서입니다.
//! 스키마가 강제되지 않는 컬렉션이므로 문서를 해석하지 않고 그대로 보관합니다.
//! 필드 누락, 예상과 다른 타입, 고정 필드 외의 추가 필드 모두 읽기 경로에서 그대로 유지됩니다.

use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::dto::spots::request::SpotRequest;

/// 여행 비용
///
/// 클라이언트가 숫자 또는 문자열로 보내며, 받은 형태 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Integer(i64),
    Number(f64),
    Text(String),
}

/// 관광지 엔티티
///
/// 저장된 BSON 문서를 그대로 감쌉니다. 어떤 문서든 역직렬화에 성공합니다.
///
/// ```rust,ignore
/// let spot: Spot = bson::from_document(doc! { "spotName": "Cox's Bazar", "visitors": 5000 })?;
/// assert_eq!(spot.str_field("spotName"), Some("Cox's Bazar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spot(Document);

impl Spot {
    pub fn from_document(document: Document) -> Self {
        Self(document)
    }

    /// 요청 본문의 고정 필드 11개로 새 문서를 구성합니다.
    pub fn from_request(id: ObjectId, request: &SpotRequest) -> AppResult<Self> {
        let mut spot = Self::default();
        spot.0.insert("_id", id);
        spot.apply(request.to_set_document()?);

        Ok(spot)
    }

    /// `_id`가 ObjectId일 때만 반환합니다.
    pub fn id(&self) -> Option<ObjectId> {
        self.0.get_object_id("_id").ok()
    }

    /// 문자열 필드 조회. 없거나 문자열이 아니면 `None`.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get_str(key).ok()
    }

    /// `$set`과 같은 의미로 필드를 덮어씁니다.
    ///
    /// 값이 하나라도 바뀌었으면 `true`를 반환합니다.
    pub fn apply(&mut self, set: Document) -> bool {
        let mut modified = false;

        for (key, value) in set {
            if self.0.get(&key) != Some(&value) {
                self.0.insert(key, value);
                modified = true;
            }
        }

        modified
    }

    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.0.get(key)
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}
