//! # ObjectId 유틸리티
//!
//! 경로 파라미터로 받은 식별자를 MongoDB ObjectId로 변환합니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};

/// 24자리 16진수 문자열을 ObjectId로 파싱합니다.
///
/// 형식이 맞지 않으면 `ValidationError`(400)를 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::object_id::parse_object_id;
///
/// let id = parse_object_id("507f1f77bcf86cd799439011")?;
/// assert!(parse_object_id("not-an-id").is_err());
/// ```
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("Invalid id: {}", id)))
}
