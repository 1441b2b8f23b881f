//! Travel Tide 서버 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 한 번 생성해 모든 요청에서 재사용합니다.

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use travel_tide_server::config::{CorsConfig, ServerConfig};
use travel_tide_server::core::AppState;
use travel_tide_server::db::Database;
use travel_tide_server::middlewares::{configure_cors, PreflightStatus};
use travel_tide_server::repositories::spots::SpotRepository;
use travel_tide_server::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Travel Tide 서버 시작중...");

    let database = initialize_data_store().await?;
    let state = web::Data::new(AppState::from_database(&database));

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, preflight 204 변환, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origin = CorsConfig::allowed_origin();

    info!("🌐 travel tide server is running on {}", bind_address);
    info!("🔓 CORS 허용 Origin: {}", allowed_origin);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(configure_cors(&allowed_origin))
            .wrap(PreflightStatus)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 프로필 파일이 없으면 기본 `.env`로 대체합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename.map(dotenv::from_filename) {
        Some(Ok(_)) => {}
        Some(Err(_)) | None => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=travel_tide_server=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}

/// MongoDB 연결을 초기화하고 조회 인덱스를 준비합니다
///
/// 연결 실패는 `std::io::Error`로 변환되어 프로세스가 종료 코드와 함께 끝납니다.
async fn initialize_data_store() -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let spots = SpotRepository::new(&database.get_database());
    if let Err(e) = spots.create_indexes().await {
        warn!("⚠️ 인덱스 생성 실패, 인덱스 없이 계속합니다: {}", e);
    }

    Ok(database)
}
