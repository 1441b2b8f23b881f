//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 라우트는 정확히 하나의 저장소 연산으로 변환됩니다.
//! 핸들러는 구체 타입 대신 [`SpotStore`] / [`CountryStore`] trait 객체를 주입받으므로,
//! 운영 환경의 MongoDB 리포지토리와 테스트용 인메모리 구현을 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::SpotStore;
//!
//! async fn spots_in(store: &dyn SpotStore) -> AppResult<Vec<Spot>> {
//!     store.find_by_country("Iceland").await
//! }
//! ```

pub mod spots;
pub mod countries;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use crate::core::errors::AppResult;
use crate::domain::dto::spots::request::SpotRequest;
use crate::domain::entities::spots::Spot;

/// 삽입 결과 요약
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertSummary {
    pub inserted_id: ObjectId,
}

/// 수정 결과 요약
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateSummary {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// 삭제 결과 요약
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

/// `spot` 컬렉션 연산
#[async_trait]
pub trait SpotStore: Send + Sync {
    /// 전체 조회 (필터 `{}`)
    async fn find_all(&self) -> AppResult<Vec<Spot>>;

    /// `_id`로 단건 조회. 없으면 `None`.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Spot>>;

    /// `userEmail`이 정확히 일치하는 문서 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Spot>>;

    /// `country`가 정확히 일치하는 문서 조회 (대소문자 구분)
    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Spot>>;

    /// 새 문서 삽입
    async fn insert(&self, spot: SpotRequest) -> AppResult<InsertSummary>;

    /// 고정 필드 11개를 `$set`으로 덮어씁니다.
    async fn update(&self, id: ObjectId, spot: SpotRequest) -> AppResult<UpdateSummary>;

    /// `_id`로 단건 삭제
    async fn delete(&self, id: ObjectId) -> AppResult<DeleteSummary>;
}

/// `countries` 컬렉션 연산 (읽기 전용)
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// 전체 조회. 문서는 해석하지 않고 그대로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Document>>;
}
