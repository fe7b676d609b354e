//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트를 애플리케이션에 등록합니다. 라우트별 접근 제어는
//! 여기서 설정하지 않으며, 앱 전체를 감싸는 보안 필터 체인이 각 경로를
//! [`AuthorizationRules`](crate::config::AuthorizationRules)로 판정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // 기능별 라우트
    configure_account_routes(cfg);
    configure_public_routes(cfg);
    configure_login_routes(cfg);
}

/// 보호된 계좌 관련 라우트
///
/// - `GET /myAccount` - role `USER`
/// - `GET /myBalance` - role `USER` or `ADMIN`
/// - `GET /myLoans` - role `USER`
/// - `GET /myCards` - role `USER`
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::accounts::get_account_details)
        .service(handlers::accounts::get_balance_details)
        .service(handlers::accounts::get_loan_details)
        .service(handlers::accounts::get_card_details);
}

/// 인증 없이 접근 가능한 Public 라우트
///
/// - `GET /notices`
/// - `POST /contact` - no CSRF token required
/// - `POST /register` - no CSRF token required
///
/// ```bash
/// curl -X POST http://localhost:8080/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"happy@example.com","mobile_number":"5334122365","pwd":"EazyBytes12"}'
/// ```
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::public::get_notices)
        .service(handlers::public::save_contact_inquiry)
        .service(handlers::public::register_customer);
}

fn configure_login_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::user::get_user_details_after_login);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "bank_security_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
