//! 도메인 엔티티
//!
//! MongoDB 컬렉션에 저장되는 문서 구조를 정의합니다.
//! `countries` 컬렉션은 해석하지 않는 불투명 문서이므로 별도 엔티티가 없습니다.

pub mod spots;

pub use spots::*;
