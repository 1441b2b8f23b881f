//! 도메인 계층
//!
//! - [`entities`] - 저장소 문서 구조
//! - [`dto`] - HTTP 요청/응답 구조

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
