//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! handlers/
//! ├── accounts.rs  - /myAccount, /myBalance, /myLoans, /myCards
//! ├── public.rs    - /notices, /contact, /register
//! └── user.rs      - /user (login)
//! ```
//!
//! 핸들러에는 보안 로직이 없습니다. 인증과 인가는
//! [`SecurityFilterChain`](crate::middlewares::SecurityFilterChain)이 수행하며,
//! 보호된 핸들러는
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//! extractor로 인증된 사용자 정보를 읽습니다.

pub mod accounts;
pub mod public;
pub mod user;
