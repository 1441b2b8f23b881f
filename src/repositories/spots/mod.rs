//! 관광지 데이터 액세스 계층
//!
//! [`SpotRepository`](spot_repo::SpotRepository)를 통해 `spot` 컬렉션을 다룹니다.

pub mod spot_repo;

pub use spot_repo::SpotRepository;
