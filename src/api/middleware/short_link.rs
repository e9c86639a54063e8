//! Short-link interception middleware
//!
//! 包裹整个 App：短码请求直接返回 302 到后端解析服务，
//! 其余请求原样交给内部路由。本中间件自身从不返回错误。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{CACHE_CONTROL, HeaderValue, LOCATION},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, trace, warn};

use crate::gateway::{GatewayHandle, RouteDecision};
use crate::utils::decode_path;

#[derive(Clone)]
pub struct ShortLinkGateway {
    handle: GatewayHandle,
}

impl ShortLinkGateway {
    pub fn new(handle: GatewayHandle) -> Self {
        Self { handle }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ShortLinkGateway
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ShortLinkGatewayMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ShortLinkGatewayMiddleware {
            service: Rc::new(service),
            handle: self.handle.clone(),
        }))
    }
}

pub struct ShortLinkGatewayMiddleware<S> {
    service: Rc<S>,
    handle: GatewayHandle,
}

impl<S, B> ShortLinkGatewayMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    fn forward(
        &self,
        req: ServiceRequest,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        let srv = self.service.clone();
        Box::pin(async move {
            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

impl<S, B> Service<ServiceRequest> for ShortLinkGatewayMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let gateway = self.handle.load();
        let decision = gateway.decide(&decode_path(req.path()));

        match decision {
            RouteDecision::Redirect { code, location } => {
                // 无法作为响应头的地址按放行处理，而不是返回 500
                match HeaderValue::from_str(&location) {
                    Ok(value) => {
                        debug!("Short code '{}' -> {}", code, location);
                        let response = HttpResponse::Found()
                            .insert_header((LOCATION, value))
                            .insert_header((CACHE_CONTROL, "no-store"))
                            .finish()
                            .map_into_right_body();
                        Box::pin(ready(Ok(req.into_response(response))))
                    }
                    Err(_) => {
                        warn!(
                            "Resolver URL for '{}' is not a valid header value, passing through",
                            code
                        );
                        self.forward(req)
                    }
                }
            }
            RouteDecision::PassThrough(reason) => {
                trace!("Pass through {} ({})", req.path(), reason);
                self.forward(req)
            }
        }
    }
}
