//! 핵심 공통 타입
//!
//! - [`errors`] - 애플리케이션 전역 에러 타입과 HTTP 응답 변환
//! - [`state`] - 핸들러에 주입되는 저장소 핸들

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::AppState;
