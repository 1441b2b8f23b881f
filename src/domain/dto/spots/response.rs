//! 관광지 응답 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::domain::entities::spots::Spot;
use crate::repositories::{DeleteSummary, InsertSummary, UpdateSummary};
use crate::utils::bson_json::document_to_json;

pub const SPOT_UPDATED_MESSAGE: &str = "Spot updated successfully!";
pub const NO_CHANGES_MESSAGE: &str = "No changes were made.";

/// 관광지 응답 DTO
///
/// 저장된 문서를 그대로 JSON으로 옮깁니다.
/// ObjectId는 24자리 16진수 문자열이 되고, `_id`가 없는 문서에는 `_id` 키도 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotResponse(Value);

impl From<Spot> for SpotResponse {
    fn from(spot: Spot) -> Self {
        Self(document_to_json(spot.into_document()))
    }
}

/// `POST /add-tourists-spot` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSpotResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertSummary> for InsertSpotResponse {
    fn from(summary: InsertSummary) -> Self {
        Self {
            acknowledged: true,
            inserted_id: summary.inserted_id.to_hex(),
        }
    }
}

/// `DELETE /add-tourists-spot/{id}` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSpotResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteSummary> for DeleteSpotResponse {
    fn from(summary: DeleteSummary) -> Self {
        Self {
            acknowledged: true,
            deleted_count: summary.deleted_count,
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<UpdateSummary> for MessageResponse {
    /// 실제로 수정된 문서가 있을 때만 "updated" 메시지를 돌려줍니다.
    fn from(summary: UpdateSummary) -> Self {
        let message = if summary.modified_count > 0 {
            SPOT_UPDATED_MESSAGE
        } else {
            NO_CHANGES_MESSAGE
        };

        Self { message: message.to_string() }
    }
}
