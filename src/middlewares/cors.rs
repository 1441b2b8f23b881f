//! CORS 설정
//!
//! 프론트엔드 단일 Origin에 대해 자격 증명(쿠키 등)을 포함한 요청을 허용합니다.

use actix_cors::Cors;

/// 허용 HTTP 메서드
pub const ALLOWED_METHODS: [&str; 6] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"];

/// CORS 미들웨어를 구성합니다
///
/// # Allowed Origins
///
/// * `origin` 하나만 허용 (기본값: `http://localhost:5173`, Vite 개발 서버)
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&CorsConfig::allowed_origin());
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(ALLOWED_METHODS)
        .allow_any_header()
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
}
