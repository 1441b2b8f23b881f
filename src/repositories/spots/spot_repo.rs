//! # 관광지 리포지토리 구현
//!
//! `spot` 컬렉션에 대한 얇은 pass-through 계층입니다.
//! 조인, 집계, 다중 문서 트랜잭션 없이 라우트당 하나의 MongoDB 호출만 수행합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::spots::request::SpotRequest;
use crate::domain::entities::spots::Spot;
use crate::repositories::{DeleteSummary, InsertSummary, SpotStore, UpdateSummary};

/// 관광지 데이터 액세스 리포지토리
///
/// ## 컬렉션
/// - **컬렉션명**: `spot`
/// - **인덱스**: userEmail, country (조회 키)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = SpotRepository::new(&database.get_database());
///
/// let mine = repo.find_by_email("a@b.com").await?;
/// let iceland = repo.find_by_country("Iceland").await?;
/// ```
#[derive(Clone)]
pub struct SpotRepository {
    /// `Spot`은 원본 문서를 감싸므로 조회 시 스키마 검증이 일어나지 않습니다.
    collection: Collection<Spot>,
}

impl SpotRepository {
    pub const COLLECTION: &'static str = "spot";

    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection::<Spot>(Self::COLLECTION),
        }
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Spot>> {
        let cursor = self.collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조회 필드에 인덱스를 생성합니다.
    ///
    /// 1. `userEmail` (오름차순) - `/my-list?email=` 조회
    /// 2. `country` (오름차순) - `/tourist-spots/{countryName}` 조회
    ///
    /// 유니크 제약은 두지 않습니다. 한 사용자가 여러 스팟을 등록할 수 있습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "userEmail": 1 })
            .options(IndexOptions::builder()
                .name("user_email_asc".to_string())
                .build())
            .build();

        let country_index = IndexModel::builder()
            .keys(doc! { "country": 1 })
            .options(IndexOptions::builder()
                .name("country_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, country_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SpotStore for SpotRepository {
    async fn find_all(&self) -> AppResult<Vec<Spot>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Spot>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Spot>> {
        self.find_many(doc! { "userEmail": email }).await
    }

    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Spot>> {
        self.find_many(doc! { "country": country }).await
    }

    async fn insert(&self, spot: SpotRequest) -> AppResult<InsertSummary> {
        log::debug!("📝 새 관광지 등록: {:?}", spot);

        let result = self.collection
            .clone_with_type::<SpotRequest>()
            .insert_one(&spot)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let inserted_id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError(
                format!("삽입된 _id가 ObjectId가 아닙니다: {}", result.inserted_id)
            ))?;

        Ok(InsertSummary { inserted_id })
    }

    async fn update(&self, id: ObjectId, spot: SpotRequest) -> AppResult<UpdateSummary> {
        let set_document = spot.to_set_document()?;

        let result = self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": set_document })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(UpdateSummary {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> AppResult<DeleteSummary> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(DeleteSummary {
            deleted_count: result.deleted_count,
        })
    }
}
