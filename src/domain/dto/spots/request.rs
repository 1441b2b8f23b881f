//! 관광지 요청 DTO
//!
//! 요청 본문을 그대로 저장소에 쓰지 않고, 고정된 11개 필드만 받아들입니다.
//! 누락된 필드, 잘못된 타입, 정의되지 않은 필드는 역직렬화 단계에서 400으로 거부됩니다.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::spots::Cost;

/// 관광지 생성/수정 요청 본문
///
/// `POST /add-tourists-spot`, `PUT /my-list/{id}` 에서 사용됩니다.
///
/// ```json
/// {
///   "image": "https://example.com/blue-lagoon.jpg",
///   "spotName": "Blue Lagoon",
///   "country": "Iceland",
///   "location": "Grindavík",
///   "description": "Geothermal spa",
///   "cost": 90,
///   "seasonality": "All year",
///   "travelTime": "3 days",
///   "visitors": "1M/year",
///   "userEmail": "a@b.com",
///   "userName": "Ana"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpotRequest {
    pub image: String,
    pub spot_name: String,
    pub country: String,
    pub location: String,
    pub description: String,
    pub cost: Cost,
    pub seasonality: String,
    pub travel_time: String,
    pub visitors: String,
    pub user_email: String,
    pub user_name: String,
}

impl SpotRequest {
    /// `$set` 연산에 사용할 BSON 문서로 변환합니다.
    pub fn to_set_document(&self) -> AppResult<Document> {
        bson::to_document(self).map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 이메일 누락 시 응답 메시지
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

/// `GET /my-list?email=` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MyListQuery {
    #[validate(
        required(message = "Email is required"),
        length(min = 1, message = "Email is required")
    )]
    pub email: Option<String>,
}

impl MyListQuery {
    /// 검증 후 이메일을 꺼냅니다. 없거나 빈 문자열이면 400.
    pub fn into_email(self) -> AppResult<String> {
        self.validate()
            .map_err(|e| AppError::ValidationError(first_message(&e)))?;

        self.email
            .ok_or_else(|| AppError::ValidationError(EMAIL_REQUIRED_MESSAGE.to_string()))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_lagoon_json() -> serde_json::Value {
        serde_json::json!({
            "image": "https://example.com/blue-lagoon.jpg",
            "spotName": "Blue Lagoon",
            "country": "Iceland",
            "location": "Grindavík",
            "description": "Geothermal spa",
            "cost": 90,
            "seasonality": "All year",
            "travelTime": "3 days",
            "visitors": "1M/year",
            "userEmail": "a@b.com",
            "userName": "Ana"
        })
    }

    #[test]
    fn test_spot_request_accepts_full_body() {
        let request: SpotRequest = serde_json::from_value(blue_lagoon_json()).unwrap();

        assert_eq!(request.spot_name, "Blue Lagoon");
        assert_eq!(request.cost, Cost::Integer(90));
    }

    #[test]
    fn test_spot_request_rejects_unknown_field() {
        let mut body = blue_lagoon_json();
        body["isAdmin"] = serde_json::json!(true);

        assert!(serde_json::from_value::<SpotRequest>(body).is_err());
    }

    #[test]
    fn test_spot_request_rejects_missing_field() {
        let mut body = blue_lagoon_json();
        body.as_object_mut().unwrap().remove("userEmail");

        assert!(serde_json::from_value::<SpotRequest>(body).is_err());
    }

    #[test]
    fn test_set_document_uses_camel_case_keys() {
        let request: SpotRequest = serde_json::from_value(blue_lagoon_json()).unwrap();
        let document = request.to_set_document().unwrap();

        assert_eq!(document.len(), 11);
        assert_eq!(document.get_str("spotName").unwrap(), "Blue Lagoon");
        assert_eq!(document.get_str("travelTime").unwrap(), "3 days");
        assert_eq!(document.get_i64("cost").unwrap(), 90);
    }

    #[test]
    fn test_my_list_query_requires_email() {
        let missing = MyListQuery { email: None };
        let empty = MyListQuery { email: Some(String::new()) };

        for query in [missing, empty] {
            match query.into_email() {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, EMAIL_REQUIRED_MESSAGE),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_my_list_query_returns_email() {
        let query = MyListQuery { email: Some("a@b.com".to_string()) };

        assert_eq!(query.into_email().unwrap(), "a@b.com");
    }
}
