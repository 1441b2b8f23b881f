//! 애플리케이션 전역 에러 타입
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `actix_web::ResponseError` 구현을 통해 정해진 HTTP 상태 코드와
//! JSON 본문으로 변환됩니다. 처리되지 않은 실패 경로는 존재하지 않습니다.
//!
//! ## 응답 형식
//!
//! | 변형 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `ValidationError` | 400 | `{ "message": <msg> }` |
//! | `DatabaseError` | 500 | `{ "message": "Internal server error" }` |
//! | `OperationFailed` | 500 | `{ "message": <message> }` |
//! | `UpdateFailed` | 500 | `{ "error": "Failed to update the spot." }` |
//!
//! 5xx 에러의 내부 원인은 서버 로그에만 기록되며 클라이언트에는 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ErrorContext};
//!
//! async fn list_countries(store: &dyn CountryStore) -> AppResult<Vec<serde_json::Value>> {
//!     store.find_all().await.context("Failed to fetch countries")
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 일반 500 응답에 사용되는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 스팟 수정 실패 시 사용되는 고정 메시지
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update the spot.";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 잘못된 ObjectId, 누락된 쿼리 파라미터, 스키마에 맞지 않는 요청 본문 등.
    #[error("{0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 리포지토리 계층에서 MongoDB 드라이버 에러를 감쌀 때 사용합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 라우트별 메시지를 가진 작업 실패 (500 Internal Server Error)
    #[error("{message}: {cause}")]
    OperationFailed {
        /// 클라이언트에 전달되는 메시지
        message: &'static str,
        /// 로그에만 남는 내부 원인
        cause: String,
    },

    /// 스팟 수정 실패 (500, `error` 키 사용)
    #[error("Update failed: {0}")]
    UpdateFailed(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 변형을 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        let body = match self {
            AppError::ValidationError(msg) => serde_json::json!({ "message": msg }),
            AppError::DatabaseError(_) => serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }),
            AppError::OperationFailed { message, .. } => serde_json::json!({ "message": message }),
            AppError::UpdateFailed(_) => serde_json::json!({ "error": UPDATE_FAILED_MESSAGE }),
        };

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 실패한 결과에 라우트별 클라이언트 메시지를 붙이는 확장 trait
///
/// ```rust,ignore
/// let spots = store.find_by_email(&email).await.context("Error fetching spots")?;
/// ```
pub trait ErrorContext<T> {
    /// 에러를 `AppError::OperationFailed`로 변환합니다.
    fn context(self, message: &'static str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, message: &'static str) -> AppResult<T> {
        self.map_err(|e| AppError::OperationFailed {
            message,
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_error_uses_message_key() {
        let body = body_json(AppError::ValidationError("Email is required".to_string())).await;

        assert_eq!(body, serde_json::json!({ "message": "Email is required" }));
    }

    #[actix_web::test]
    async fn test_database_error_hides_cause() {
        let body = body_json(AppError::DatabaseError("auth failed for user x".to_string())).await;

        assert_eq!(body, serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }));
    }

    #[actix_web::test]
    async fn test_update_failed_uses_error_key() {
        let body = body_json(AppError::UpdateFailed("timeout".to_string())).await;

        assert_eq!(body, serde_json::json!({ "error": "Failed to update the spot." }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Failed to fetch countries");

        match app_result {
            Err(AppError::OperationFailed { message, cause }) => {
                assert_eq!(message, "Failed to fetch countries");
                assert_eq!(cause, "original error");
            }
            other => panic!("Expected OperationFailed, got {:?}", other),
        }
    }
}
