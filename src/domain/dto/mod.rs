//! 요청/응답 DTO
//!
//! HTTP 계층과 엔티티 사이에서 JSON 스키마를 명시적으로 정의합니다.

pub mod spots;

pub use spots::*;
