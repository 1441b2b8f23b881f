//! # HTTP Request Handlers Module
//!
//! 각 핸들러는 경로/쿼리/본문을 타입으로 추출한 뒤 저장소 호출 하나를 수행하고,
//! 결과를 JSON으로 직렬화합니다. 저장소 핸들은 `web::Data<AppState>`로 주입됩니다.
//!
//! ## 모듈 구성
//!
//! - **`spots`**: `/add-tourists-spot`, `/tourist-spots/{countryName}`
//! - **`my_list`**: `/my-list` (사용자별 목록, 단건 조회, 수정)
//! - **`countries`**: `/countries`
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 문서가 없을 때는 404가 아니라 200 + `null`을 돌려줍니다.

pub mod spots;
pub mod my_list;
pub mod countries;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;
    use crate::core::AppState;
    use crate::domain::dto::spots::request::SpotRequest;
    use crate::domain::entities::spots::Cost;
    use crate::repositories::memory::{InMemoryCountryStore, InMemorySpotStore};

    pub fn state(spots: InMemorySpotStore, countries: InMemoryCountryStore) -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(spots), Arc::new(countries)))
    }

    pub fn empty_state() -> web::Data<AppState> {
        state(InMemorySpotStore::new(), InMemoryCountryStore::default())
    }

    pub fn spot_request(spot_name: &str, country: &str, user_email: &str) -> SpotRequest {
        SpotRequest {
            image: format!("https://images.example.com/{}.jpg", spot_name.to_lowercase().replace(' ', "-")),
            spot_name: spot_name.to_string(),
            country: country.to_string(),
            location: "Grindavík".to_string(),
            description: format!("{} in {}", spot_name, country),
            cost: Cost::Integer(90),
            seasonality: "All year".to_string(),
            travel_time: "3 days".to_string(),
            visitors: "1M/year".to_string(),
            user_email: user_email.to_string(),
            user_name: "Ana".to_string(),
        }
    }
}
