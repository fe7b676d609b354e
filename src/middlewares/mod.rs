//! 미들웨어 모듈
//!
//! 하나의 [`SecurityFilterChain`]이 애플리케이션 전체를 감싸고,
//! 핸들러에 요청이 도달하기 전에 보안 필터들을 정해진 순서대로 실행합니다.
//! Spring Security의 FilterChain과 유사한 역할을 수행합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use bank_security_backend::state::AppState;
//!
//! let state = AppState::from_env();
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(state.clone()))
//!         .wrap(state.security_filter_chain())
//!         .wrap(state.security_config.configure_cors())
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 필터가 실패하면 체인이 중단되고 해당 [`AppError`](crate::errors::AppError)가
//! 그대로 응답이 됩니다. 앞선 필터가 등록한 응답 헤더(JWT, CSRF 쿠키)는
//! 에러 응답에도 기록됩니다.

pub mod filters;
pub mod security_chain;
pub mod security_filter;
mod security_inner;

pub use security_chain::{SecurityFilterChain, SecurityFilterChainBuilder};
pub use security_filter::{SecurityExchange, SecurityFilter};
