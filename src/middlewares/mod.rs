//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. CORS (`configure_cors`)
//! - 단일 Origin, 자격 증명 허용
//! - GET/HEAD/PUT/PATCH/POST/DELETE 허용
//!
//! ### 2. Preflight 상태 코드 (`PreflightStatus`)
//! - 모든 경로의 preflight 요청을 204 No Content로 응답
//! - 허용되지 않은 Origin은 허용 헤더 없이 204
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::App;
//! use crate::middlewares::{configure_cors, PreflightStatus};
//!
//! App::new()
//!     .wrap(configure_cors("http://localhost:5173"))
//!     .wrap(PreflightStatus) // CORS 바깥쪽
//!     .configure(configure_all_routes)
//! ```

pub mod cors;
pub mod preflight_middleware;
mod preflight_inner;

// 미들웨어 재export
pub use cors::configure_cors;
pub use preflight_middleware::PreflightStatus;
