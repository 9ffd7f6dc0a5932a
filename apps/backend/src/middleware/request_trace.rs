//! Gives each request a fresh uuid v4 trace id.
//!
//! Later layers find it in request extensions; error rendering reads it from
//! `trace_ctx`; clients get it back as `x-request-id`.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        let header_value = HeaderValue::from_str(&trace_id);
        req.extensions_mut().insert(trace_id.clone());

        let fut = trace_ctx::with_trace_id(trace_id, self.service.call(req));

        Box::pin(async move {
            let mut res = fut.await?;
            if let Ok(value) = header_value {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}
