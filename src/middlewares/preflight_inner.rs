//! PreflightStatus 미들웨어의 요청 처리 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::{header, Method, StatusCode};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

pub struct PreflightStatusService<S> {
    pub service: Rc<S>,
}

/// `OPTIONS` + `Access-Control-Request-Method` 헤더가 있으면 preflight 요청
pub fn is_preflight(req: &ServiceRequest) -> bool {
    req.method() == Method::OPTIONS
        && req.headers().contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

impl<S, B> Service<ServiceRequest> for PreflightStatusService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let preflight = is_preflight(&req);

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if !preflight {
                return Ok(res.map_into_left_body());
            }

            match res.status() {
                StatusCode::OK => {
                    res.response_mut().head_mut().status = StatusCode::NO_CONTENT;
                    log::debug!("preflight 응답: 204 No Content");
                    Ok(res.map_into_left_body())
                }
                // CORS 거부 (허용되지 않은 Origin/메서드): 허용 헤더 없이 빈 204
                StatusCode::BAD_REQUEST => {
                    log::debug!("거부된 preflight: {}", res.request().path());
                    let (req, _) = res.into_parts();
                    let res = HttpResponse::NoContent().finish();
                    Ok(ServiceResponse::new(req, res).map_into_right_body())
                }
                _ => Ok(res.map_into_left_body()),
            }
        })
    }
}
