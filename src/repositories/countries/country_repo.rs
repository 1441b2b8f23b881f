//! # 국가 리포지토리 구현
//!
//! `countries` 컬렉션은 이 서비스 입장에서 읽기 전용이며,
//! 문서 내용은 해석하지 않고 그대로 전달합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use crate::core::errors::{AppError, AppResult};
use crate::repositories::CountryStore;

#[derive(Clone)]
pub struct CountryRepository {
    collection: Collection<Document>,
}

impl CountryRepository {
    pub const COLLECTION: &'static str = "countries";

    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection::<Document>(Self::COLLECTION),
        }
    }
}

#[async_trait]
impl CountryStore for CountryRepository {
    async fn find_all(&self) -> AppResult<Vec<Document>> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
