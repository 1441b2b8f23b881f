//! # Country HTTP Handlers
//!
//! `countries` 컬렉션 전체를 그대로 반환합니다.

use actix_web::{get, web, HttpResponse};
use serde_json::Value;
use crate::core::errors::{AppError, ErrorContext};
use crate::core::AppState;
use crate::utils::bson_json::document_to_json;

/// 전체 국가 조회
///
/// DB 오류 시 500 `{ "message": "Failed to fetch countries" }`
#[get("/countries")]
pub async fn list_countries(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let countries = state.countries
        .find_all()
        .await
        .context("Failed to fetch countries")?;

    let body: Vec<Value> = countries.into_iter().map(document_to_json).collect();

    Ok(HttpResponse::Ok().json(body))
}
