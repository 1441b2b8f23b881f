//! 관광지 엔티티 모듈

pub mod spot;

pub use spot::{Cost, Spot};
