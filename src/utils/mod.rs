//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`object_id`] - 경로 파라미터 → ObjectId 파싱
//! - [`bson_json`] - 불투명 BSON 문서의 JSON 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::object_id::parse_object_id;
//! use crate::utils::bson_json::document_to_json;
//!
//! let id = parse_object_id("507f1f77bcf86cd799439011")?;
//! let json = document_to_json(country_document);
//! ```

pub mod object_id;
pub mod bson_json;
