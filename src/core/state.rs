//! 핸들러에 주입되는 애플리케이션 상태
//!
//! 전역 싱글톤 대신 `web::Data<AppState>`로 저장소 핸들을 명시적으로 전달합니다.
//! 운영 환경에서는 MongoDB 리포지토리가, 테스트에서는 인메모리 구현이 주입됩니다.

use std::sync::Arc;

use crate::db::Database;
use crate::repositories::countries::CountryRepository;
use crate::repositories::spots::SpotRepository;
use crate::repositories::{CountryStore, SpotStore};

/// 요청 간에 공유되는 저장소 핸들 묶음
#[derive(Clone)]
pub struct AppState {
    /// `spot` 컬렉션 접근
    pub spots: Arc<dyn SpotStore>,
    /// `countries` 컬렉션 접근
    pub countries: Arc<dyn CountryStore>,
}

impl AppState {
    pub fn new(spots: Arc<dyn SpotStore>, countries: Arc<dyn CountryStore>) -> Self {
        Self { spots, countries }
    }

    /// 연결된 데이터베이스로부터 MongoDB 리포지토리를 구성합니다.
    pub fn from_database(database: &Database) -> Self {
        let db = database.get_database();

        Self::new(
            Arc::new(SpotRepository::new(&db)),
            Arc::new(CountryRepository::new(&db)),
        )
    }
}
