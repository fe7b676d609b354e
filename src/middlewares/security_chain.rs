//! Security filter chain middleware
//!
//! Runs an ordered list of [`SecurityFilter`]s in front of the handlers.
//! Custom filters are placed relative to basic authentication with
//! [`SecurityFilterChainBuilder::add_filter_before`],
//! [`SecurityFilterChainBuilder::add_filter_at`] and
//! [`SecurityFilterChainBuilder::add_filter_after`]; the built-in CSRF,
//! basic authentication and authorization filters are inserted when the
//! chain is built, so a custom filter registered *at* basic authentication
//! runs just ahead of it.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::security_filter::SecurityFilter;
use crate::middlewares::security_inner::SecurityChainService;

const CSRF_ORDER: i32 = 100;
const BASIC_AUTHENTICATION_ORDER: i32 = 200;
const AUTHORIZATION_ORDER: i32 = i32::MAX;

struct FilterRegistration {
    order: i32,
    filter: Arc<dyn SecurityFilter>,
}

/// Ordered security filters, usable as an actix-web middleware
#[derive(Clone)]
pub struct SecurityFilterChain {
    filters: Arc<Vec<Arc<dyn SecurityFilter>>>,
}

impl SecurityFilterChain {
    pub fn builder() -> SecurityFilterChainBuilder {
        SecurityFilterChainBuilder::default()
    }

    /// Filter names in execution order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

/// Collects filter registrations and sorts them into a chain
///
/// # Examples
///
/// ```rust,ignore
/// let chain = SecurityFilterChain::builder()
///     .http_basic(BasicAuthenticationFilter::new(customer_service))
///     .authorize_http_requests(AuthorizationFilter::new(rules))
///     .add_filter_before(RequestValidationFilter::new())
///     .build();
///
/// App::new().wrap(chain)
/// ```
#[derive(Default)]
pub struct SecurityFilterChainBuilder {
    custom: Vec<FilterRegistration>,
    csrf: Option<Arc<dyn SecurityFilter>>,
    http_basic: Option<Arc<dyn SecurityFilter>>,
    authorization: Option<Arc<dyn SecurityFilter>>,
}

impl SecurityFilterChainBuilder {
    pub fn csrf(mut self, filter: impl SecurityFilter + 'static) -> Self {
        self.csrf = Some(Arc::new(filter));
        self
    }

    pub fn http_basic(mut self, filter: impl SecurityFilter + 'static) -> Self {
        self.http_basic = Some(Arc::new(filter));
        self
    }

    pub fn authorize_http_requests(mut self, filter: impl SecurityFilter + 'static) -> Self {
        self.authorization = Some(Arc::new(filter));
        self
    }

    pub fn add_filter_before(self, filter: impl SecurityFilter + 'static) -> Self {
        self.register(BASIC_AUTHENTICATION_ORDER - 1, Arc::new(filter))
    }

    pub fn add_filter_at(self, filter: impl SecurityFilter + 'static) -> Self {
        self.register(BASIC_AUTHENTICATION_ORDER, Arc::new(filter))
    }

    pub fn add_filter_after(self, filter: impl SecurityFilter + 'static) -> Self {
        self.register(BASIC_AUTHENTICATION_ORDER + 1, Arc::new(filter))
    }

    fn register(mut self, order: i32, filter: Arc<dyn SecurityFilter>) -> Self {
        self.custom.push(FilterRegistration { order, filter });
        self
    }

    /// Sorts by order; equal orders keep registration sequence.
    pub fn build(self) -> SecurityFilterChain {
        let mut registrations = self.custom;

        let built_ins = [
            (CSRF_ORDER, self.csrf),
            (BASIC_AUTHENTICATION_ORDER, self.http_basic),
            (AUTHORIZATION_ORDER, self.authorization),
        ];
        for (order, filter) in built_ins {
            if let Some(filter) = filter {
                registrations.push(FilterRegistration { order, filter });
            }
        }

        // sort_by_key is stable
        registrations.sort_by_key(|registration| registration.order);

        let filters: Vec<Arc<dyn SecurityFilter>> =
            registrations.into_iter().map(|r| r.filter).collect();

        log::debug!(
            "Security filter chain: [{}]",
            filters.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
        );

        SecurityFilterChain {
            filters: Arc::new(filters),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityFilterChain
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SecurityChainService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityChainService {
            service: Rc::new(service),
            filters: self.filters.clone(),
        }))
    }
}
