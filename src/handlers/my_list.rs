//! # My List HTTP Handlers
//!
//! 사용자가 등록한 관광지를 다루는 엔드포인트입니다.
//! `userEmail`은 소유권 검증 없이 조회 키로만 사용됩니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/my-list?email=` | 사용자별 관광지 목록 |
//! | `GET` | `/my-list/{id}` | 단건 조회 |
//! | `PUT` | `/my-list/{id}` | 고정 필드 전체 수정 |

use actix_web::{get, put, web, HttpResponse};
use crate::core::errors::{AppError, ErrorContext};
use crate::core::AppState;
use crate::domain::dto::spots::request::{MyListQuery, SpotRequest};
use crate::domain::dto::spots::response::{MessageResponse, SpotResponse};
use crate::handlers::spots::to_responses;
use crate::utils::object_id::parse_object_id;

/// 사용자 이메일로 관광지 목록 조회
///
/// - `email` 누락/빈 값 → 400 `{ "message": "Email is required" }`
/// - DB 오류 → 500 `{ "message": "Error fetching spots" }`
#[get("/my-list")]
pub async fn my_spots(
    state: web::Data<AppState>,
    query: web::Query<MyListQuery>,
) -> Result<HttpResponse, AppError> {
    let email = query.into_inner().into_email()?;

    let spots = state.spots
        .find_by_email(&email)
        .await
        .context("Error fetching spots")?;

    Ok(HttpResponse::Ok().json(to_responses(spots)))
}

/// ID로 내 관광지 조회
#[get("/my-list/{id}")]
pub async fn my_spot(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&id)?;
    let spot = state.spots.find_by_id(object_id).await?;

    Ok(HttpResponse::Ok().json(spot.map(SpotResponse::from)))
}

/// 관광지 수정
///
/// 본문의 고정 필드 11개를 `$set`으로 덮어씁니다.
/// `modifiedCount`가 0이면 (값이 같거나 문서가 없으면) "No changes were made."를 반환합니다.
#[put("/my-list/{id}")]
pub async fn update_spot(
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: web::Json<SpotRequest>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&id)?;

    let summary = state.spots
        .update(object_id, payload.into_inner())
        .await
        .map_err(|e| AppError::UpdateFailed(e.to_string()))?;

    log::debug!(
        "관광지 수정: {} (matched {}, modified {})",
        object_id, summary.matched_count, summary.modified_count
    );

    Ok(HttpResponse::Ok().json(MessageResponse::from(summary)))
}
