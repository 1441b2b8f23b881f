//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5001"
//!
//! # MongoDB Atlas 자격 증명
//! export DB_USER="traveler"
//! export DB_PASS="secret"
//! export DB_CLUSTER="cluster0.7plli.mongodb.net"
//! export DATABASE_NAME="spotDB"
//!
//! # 또는 전체 연결 문자열
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # 허용할 프론트엔드 Origin
//! export CORS_ORIGIN="http://localhost:5173"
//! ```

pub mod data_config;

pub use data_config::*;
