//! 은행 보안 서비스 백엔드
//!
//! 순서가 정해진 보안 필터 체인으로 보호되는 상태 없는(stateless) 은행 API입니다.
//! CSRF 더블 서브밋 쿠키, JWT를 발급하는 HTTP Basic 로그인,
//! 그 외 모든 요청에 대한 JWT 검증, 경로별 역할 기반 인가를 제공합니다.
//!
//! # Features
//!
//! - **보안 필터 체인**: Basic 인증 기준 before/at/after 순서로 필터 배치
//! - **JWT 인증**: `/user` 로그인 시 발급, 이후 요청마다 검증
//! - **CSRF**: `XSRF-TOKEN` 쿠키와 `X-XSRF-TOKEN` 헤더 비교
//! - **CORS**: `http://localhost:4200` 에서의 GET/POST만 허용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ CORS                │ ← 교차 출처 정책
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ SecurityFilterChain │ ← CSRF, Basic, JWT, 인가
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │      Handlers       │ ← /myAccount, /user, /register ...
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ Services · Repos    │ ← bcrypt, JWT, 고객 저장소
//! └─────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use bank_security_backend::{routes::configure_all_routes, state::AppState};
//!
//! let state = AppState::from_env();
//! let app = App::new()
//!     .app_data(web::Data::new(state.clone()))
//!     .wrap(state.security_filter_chain())
//!     .wrap(state.security_config.configure_cors())
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
