//! 테스트용 인메모리 저장소
//!
//! MongoDB 없이 핸들러를 검증하기 위해 `SpotStore` / `CountryStore`를 구현합니다.
//! `failing()`으로 생성하면 모든 연산이 `DatabaseError`를 반환합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::spots::request::SpotRequest;
use crate::domain::entities::spots::Spot;
use crate::repositories::{CountryStore, DeleteSummary, InsertSummary, SpotStore, UpdateSummary};

#[derive(Default)]
pub struct InMemorySpotStore {
    spots: Mutex<Vec<Spot>>,
    failing: bool,
}

impl InMemorySpotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    /// 이미 저장된 문서로 시작합니다. 문서는 검증 없이 그대로 보관됩니다.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            spots: Mutex::new(documents.into_iter().map(Spot::from_document).collect()),
            failing: false,
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.failing {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    fn filter(&self, predicate: impl Fn(&Spot) -> bool) -> AppResult<Vec<Spot>> {
        self.check()?;
        let spots = self.spots.lock().unwrap();
        Ok(spots.iter().filter(|s| predicate(*s)).cloned().collect())
    }
}

#[async_trait]
impl SpotStore for InMemorySpotStore {
    async fn find_all(&self) -> AppResult<Vec<Spot>> {
        self.filter(|_| true)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Spot>> {
        Ok(self.filter(|s| s.id() == Some(id))?.into_iter().next())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Spot>> {
        self.filter(|s| s.str_field("userEmail") == Some(email))
    }

    async fn find_by_country(&self, country: &str) -> AppResult<Vec<Spot>> {
        self.filter(|s| s.str_field("country") == Some(country))
    }

    async fn insert(&self, spot: SpotRequest) -> AppResult<InsertSummary> {
        self.check()?;
        let inserted_id = ObjectId::new();
        let document = Spot::from_request(inserted_id, &spot)?;
        self.spots.lock().unwrap().push(document);
        Ok(InsertSummary { inserted_id })
    }

    async fn update(&self, id: ObjectId, spot: SpotRequest) -> AppResult<UpdateSummary> {
        self.check()?;
        let set_document = spot.to_set_document()?;
        let mut spots = self.spots.lock().unwrap();

        let Some(existing) = spots.iter_mut().find(|s| s.id() == Some(id)) else {
            return Ok(UpdateSummary { matched_count: 0, modified_count: 0 });
        };

        let modified_count = if existing.apply(set_document) { 1 } else { 0 };

        Ok(UpdateSummary { matched_count: 1, modified_count })
    }

    async fn delete(&self, id: ObjectId) -> AppResult<DeleteSummary> {
        self.check()?;
        let mut spots = self.spots.lock().unwrap();
        let before = spots.len();
        if let Some(pos) = spots.iter().position(|s| s.id() == Some(id)) {
            spots.remove(pos);
        }
        Ok(DeleteSummary { deleted_count: (before - spots.len()) as u64 })
    }
}

#[derive(Default)]
pub struct InMemoryCountryStore {
    countries: Vec<Document>,
    failing: bool,
}

impl InMemoryCountryStore {
    pub fn with_countries(countries: Vec<Document>) -> Self {
        Self { countries, failing: false }
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }
}

#[async_trait]
impl CountryStore for InMemoryCountryStore {
    async fn find_all(&self) -> AppResult<Vec<Document>> {
        if self.failing {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.countries.clone())
    }
}
