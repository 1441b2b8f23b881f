//! Preflight 응답 상태 코드 미들웨어
//!
//! `actix-cors`는 허용된 preflight에 200, 거부된 preflight에 400 + 텍스트 본문으로 응답합니다.
//! 모든 preflight를 본문 없는 204 No Content로 통일합니다.
//! 거부된 경우에는 `Access-Control-Allow-*` 헤더 없이 응답하므로 브라우저가 요청을 차단합니다.
//! CORS 미들웨어보다 바깥쪽에 등록해야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::preflight_inner::PreflightStatusService;

/// preflight 응답을 204로 변환하는 미들웨어
///
/// ```rust,ignore
/// App::new()
///     .wrap(configure_cors(&origin))
///     .wrap(PreflightStatus)
/// ```
pub struct PreflightStatus;

impl<S, B> Transform<S, ServiceRequest> for PreflightStatus
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = PreflightStatusService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PreflightStatusService {
            service: Rc::new(service),
        }))
    }
}
