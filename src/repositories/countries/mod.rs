//! 국가 데이터 액세스 계층

pub mod country_repo;

pub use country_repo::CountryRepository;
