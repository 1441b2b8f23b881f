//! API 라우트 설정 모듈
//!
//! 고정된 라우트 테이블을 등록합니다. 각 라우트는 저장소 호출 하나에 대응합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/` | 생존 확인 (text/plain) |
//! | `GET` | `/health` | 헬스체크 (JSON) |
//! | `GET` | `/add-tourists-spot` | `spots::list_spots` |
//! | `GET` | `/add-tourists-spot/{id}` | `spots::get_spot` |
//! | `POST` | `/add-tourists-spot` | `spots::create_spot` |
//! | `DELETE` | `/add-tourists-spot/{id}` | `spots::delete_spot` |
//! | `GET` | `/tourist-spots/{countryName}` | `spots::spots_by_country` |
//! | `GET` | `/my-list?email=` | `my_list::my_spots` |
//! | `GET` | `/my-list/{id}` | `my_list::my_spot` |
//! | `PUT` | `/my-list/{id}` | `my_list::update_spot` |
//! | `GET` | `/countries` | `countries::list_countries` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// `GET /` 응답 본문
pub const LIVENESS_MESSAGE: &str = "travel tide server is running";

/// 모든 라우트와 추출기 설정을 등록합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(query_config());

    cfg.service(index);
    cfg.service(health_check);

    configure_spot_routes(cfg);
    configure_my_list_routes(cfg);
    configure_country_routes(cfg);
}

fn configure_spot_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::spots::list_spots)
        .service(handlers::spots::get_spot)
        .service(handlers::spots::create_spot)
        .service(handlers::spots::delete_spot)
        .service(handlers::spots::spots_by_country);
}

fn configure_my_list_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::my_list::my_spots)
        .service(handlers::my_list::my_spot)
        .service(handlers::my_list::update_spot);
}

fn configure_country_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::countries::list_countries);
}

/// 잘못된 JSON 본문을 400 `{ "message" }`로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("잘못된 요청 본문 ({}): {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        log::warn!("잘못된 쿼리 문자열 ({}): {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 생존 확인 엔드포인트
#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:5001/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "travel_tide_server",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use crate::handlers::test_support::empty_state;

    #[actix_web::test]
    async fn test_index_is_plain_text() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure_all_routes),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], LIVENESS_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "travel_tide_server");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(empty_state()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/add-tourists-spot")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ \"spotName\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
