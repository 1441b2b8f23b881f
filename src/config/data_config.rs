//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, CORS 관련 설정을 환경 변수에서 읽어옵니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 5001)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .unwrap_or(5001)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 기본 클러스터 호스트
    pub const DEFAULT_CLUSTER: &'static str = "cluster0.7plli.mongodb.net";
    /// 기본 데이터베이스 이름
    pub const DEFAULT_DATABASE: &'static str = "spotDB";
    /// 자격 증명이 없을 때 사용하는 로컬 URI
    pub const LOCAL_URI: &'static str = "mongodb://localhost:27017";

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`, 기본값: "spotDB")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string())
    }

    /// 연결 URI를 결정합니다.
    ///
    /// 1. `MONGODB_URI`가 있으면 그대로 사용
    /// 2. `DB_USER`/`DB_PASS`가 있으면 Atlas SRV URI 구성
    /// 3. 둘 다 없으면 로컬 MongoDB
    pub fn uri() -> String {
        if let Ok(uri) = env::var("MONGODB_URI") {
            return uri;
        }

        match (env::var("DB_USER"), env::var("DB_PASS")) {
            (Ok(user), Ok(pass)) => {
                let cluster = env::var("DB_CLUSTER").unwrap_or_else(|_| Self::DEFAULT_CLUSTER.to_string());
                Self::build_srv_uri(&user, &pass, &cluster, &Self::database_name())
            }
            _ => {
                log::warn!("⚠️ DB_USER/DB_PASS 미설정, 로컬 MongoDB 사용: {}", Self::LOCAL_URI);
                Self::LOCAL_URI.to_string()
            }
        }
    }

    /// Atlas SRV 연결 문자열을 구성합니다. 자격 증명은 percent-encoding 됩니다.
    pub fn build_srv_uri(user: &str, pass: &str, cluster: &str, database: &str) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/{}?retryWrites=true&w=majority&appName=Cluster0",
            urlencoding::encode(user),
            urlencoding::encode(pass),
            cluster,
            database
        )
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용되는 단일 Origin 기본값 (Vite 개발 서버)
    pub const DEFAULT_ORIGIN: &'static str = "http://localhost:5173";

    /// 허용할 Origin (`CORS_ORIGIN`)
    pub fn allowed_origin() -> String {
        env::var("CORS_ORIGIN").unwrap_or_else(|_| Self::DEFAULT_ORIGIN.to_string())
    }
}
