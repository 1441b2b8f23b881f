//! Travel Tide 서버
//!
//! 관광지(`spot`)와 국가(`countries`) 두 컬렉션에 대한 CRUD HTTP API입니다.
//! 각 라우트는 MongoDB 호출 하나에 1:1로 대응합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 라우트 테이블, CORS, JSON 파싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 파라미터 추출, 응답 직렬화
//! └─────────────────┘
//!          │  web::Data<AppState>
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SpotStore / CountryStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← spotDB.spot, spotDB.countries
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use travel_tide_server::core::AppState;
//! use travel_tide_server::db::Database;
//! use travel_tide_server::routes::configure_all_routes;
//!
//! let database = Database::new().await?;
//! let state = web::Data::new(AppState::from_database(&database));
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
