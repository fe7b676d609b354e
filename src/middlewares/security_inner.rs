//! Per-worker service that drives the security filters
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::middlewares::security_filter::{SecurityExchange, SecurityFilter};

pub struct SecurityChainService<S> {
    pub service: Rc<S>,
    pub filters: Arc<Vec<Arc<dyn SecurityFilter>>>,
}

impl<S, B> Service<ServiceRequest> for SecurityChainService<S>
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
        let filters = self.filters.clone();

        Box::pin(async move {
            let mut exchange = SecurityExchange::default();

            for filter in filters.iter() {
                if filter.should_not_filter(&req) {
                    log::trace!("{} skipped for {}", filter.name(), req.path());
                    continue;
                }

                if let Err(err) = filter.do_filter(&req, &mut exchange).await {
                    log::warn!("{} rejected {} {}: {}", filter.name(), req.method(), req.path(), err);

                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let mut res = ServiceResponse::new(req, response).map_into_right_body();
                    exchange.apply_headers(res.headers_mut());
                    return Ok(res);
                }
            }

            // Principal goes into request extensions for the AuthenticatedUser extractor
            if let Some(user) = exchange.authentication.clone() {
                req.extensions_mut().insert(user);
            }

            let mut res = service.call(req).await?.map_into_left_body();
            exchange.apply_headers(res.headers_mut());
            Ok(res)
        })
    }
}
