//! # Tourist Spot HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/add-tourists-spot` | 전체 관광지 | 배열 |
//! | `GET` | `/add-tourists-spot/{id}` | 단건 조회 | 문서 또는 `null` |
//! | `POST` | `/add-tourists-spot` | 관광지 등록 | `{ acknowledged, insertedId }` |
//! | `DELETE` | `/add-tourists-spot/{id}` | 관광지 삭제 | `{ acknowledged, deletedCount }` |
//! | `GET` | `/tourist-spots/{countryName}` | 국가별 관광지 | 배열 |

use actix_web::{delete, get, post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::AppState;
use crate::domain::dto::spots::request::SpotRequest;
use crate::domain::dto::spots::response::{DeleteSpotResponse, InsertSpotResponse, SpotResponse};
use crate::domain::entities::spots::Spot;
use crate::utils::object_id::parse_object_id;

pub(crate) fn to_responses(spots: Vec<Spot>) -> Vec<SpotResponse> {
    spots.into_iter().map(SpotResponse::from).collect()
}

/// 전체 관광지 조회
#[get("/add-tourists-spot")]
pub async fn list_spots(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let spots = state.spots.find_all().await?;

    Ok(HttpResponse::Ok().json(to_responses(spots)))
}

/// ID로 관광지 조회
///
/// 문서가 없으면 200 + `null`, ID 형식이 잘못되면 400을 반환합니다.
#[get("/add-tourists-spot/{id}")]
pub async fn get_spot(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&id)?;
    let spot = state.spots.find_by_id(object_id).await?;

    Ok(HttpResponse::Ok().json(spot.map(SpotResponse::from)))
}

/// 관광지 등록
///
/// ```bash
/// curl -X POST http://localhost:5001/add-tourists-spot \
///   -H "Content-Type: application/json" \
///   -d '{"image":"https://...","spotName":"Blue Lagoon","country":"Iceland", ...}'
/// ```
#[post("/add-tourists-spot")]
pub async fn create_spot(
    state: web::Data<AppState>,
    payload: web::Json<SpotRequest>,
) -> Result<HttpResponse, AppError> {
    let summary = state.spots.insert(payload.into_inner()).await?;

    log::info!("✅ 관광지 등록 완료: {}", summary.inserted_id);

    Ok(HttpResponse::Ok().json(InsertSpotResponse::from(summary)))
}

/// 관광지 삭제 (Hard Delete)
///
/// 존재하지 않는 ID여도 200이며 `deletedCount`가 0입니다.
#[delete("/add-tourists-spot/{id}")]
pub async fn delete_spot(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&id)?;
    let summary = state.spots.delete(object_id).await?;

    Ok(HttpResponse::Ok().json(DeleteSpotResponse::from(summary)))
}

/// 국가명으로 관광지 조회 (정확히 일치, 대소문자 구분)
#[get("/tourist-spots/{country_name}")]
pub async fn spots_by_country(
    state: web::Data<AppState>,
    country_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let spots = state.spots.find_by_country(&country_name).await?;

    Ok(HttpResponse::Ok().json(to_responses(spots)))
}
