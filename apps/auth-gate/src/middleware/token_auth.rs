//! actix-web adapter for `TokenAuthenticationInterceptor`.
//!
//! Runs `pre_handle` before the wrapped service. The wrapped service is only
//! called on `Gate::Continue`; halts and errors are answered here.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::error;

use crate::auth::{Gate, TokenAuthenticationInterceptor};
use crate::logging::pii::redact;

#[derive(Clone)]
pub struct TokenAuthentication {
    interceptor: Arc<TokenAuthenticationInterceptor>,
}

impl TokenAuthentication {
    pub fn new(interceptor: Arc<TokenAuthenticationInterceptor>) -> Self {
        Self { interceptor }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TokenAuthentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthenticationMiddleware {
            service: Rc::new(service),
            interceptor: Arc::clone(&self.interceptor),
        }))
    }
}

pub struct TokenAuthenticationMiddleware<S> {
    service: Rc<S>,
    interceptor: Arc<TokenAuthenticationInterceptor>,
}

impl<S, B> Service<ServiceRequest> for TokenAuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let interceptor = Arc::clone(&self.interceptor);

        Box::pin(async move {
            match interceptor.pre_handle(&mut req).await {
                Ok(Gate::Continue) => service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body),
                Ok(Gate::Halt(response)) => Ok(req.into_response(response).map_into_right_body()),
                Err(err) => {
                    if err.status().is_server_error() {
                        error!(code = %err.code(), detail = %redact(&err.to_string()), "Token gate failed");
                    }
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
