use std::sync::Arc;
use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web, App};
use serde_json::{json, Value};
use bank_security_backend::config::SecurityConfig;
use bank_security_backend::domain::dto::customers::RegisterCustomerRequest;
use bank_security_backend::domain::entities::customers::CustomerRole;
use bank_security_backend::domain::models::auth::BasicCredentials;
use bank_security_backend::repositories::customers::InMemoryCustomerRepository;
use bank_security_backend::routes::configure_all_routes;
use bank_security_backend::services::auth::{BCryptPasswordEncoder, TokenService};
use bank_security_backend::services::customers::CustomerService;
use bank_security_backend::state::AppState;

const PASSWORD: &str = "EazyBytes12";
const ANGULAR_ORIGIN: &str = "http://localhost:4200";

fn test_state() -> AppState {
    let customer_service = CustomerService::new(
        Arc::new(InMemoryCustomerRepository::new()),
        Arc::new(BCryptPasswordEncoder::new(4)),
    );
    let token_service = TokenService::new("integration-secret-0123456789abcdefgh", "Eazy Bank", 3600);

    AppState::new(Arc::new(customer_service), Arc::new(token_service), SecurityConfig::default())
}

async fn register(state: &AppState, email: &str, role: CustomerRole) {
    state
        .customer_service
        .register(RegisterCustomerRequest {
            email: email.to_string(),
            mobile_number: "5334122365".to_string(),
            password: PASSWORD.to_string(),
            role,
        })
        .await
        .unwrap();
}

fn basic(email: &str) -> String {
    BasicCredentials {
        username: email.to_string(),
        password: PASSWORD.to_string(),
    }
    .to_header()
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .wrap($state.security_filter_chain())
                .wrap($state.security_config.configure_cors())
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::get()
            .uri("/user")
            .insert_header((header::AUTHORIZATION, basic($email)))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        resp.headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("login response carries a JWT")
    }};
}

#[actix_web::test]
async fn test_register_endpoint_creates_customer() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "email": "happy@example.com",
            "mobile_number": "5334122365",
            "pwd": PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Given user details are successfully registered");

    // second registration with the same email
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "email": "happy@example.com",
            "mobile_number": "5334122365",
            "pwd": PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_self_registration_is_always_user_role() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "email": "sneaky@example.com",
            "mobile_number": "5334122365",
            "pwd": PASSWORD,
            "role": "ADMIN"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let customer = state.customer_service.find_by_email("sneaky@example.com").await.unwrap();
    assert_eq!(customer.role, CustomerRole::User);
    assert_eq!(customer.authorities, vec!["ROLE_USER"]);
}

#[actix_web::test]
async fn test_login_issues_jwt_and_csrf_token() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((header::AUTHORIZATION, basic("happy@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let jwt = resp.headers().get(header::AUTHORIZATION).unwrap().to_str().unwrap().to_string();
    let principal = state.token_service.validate_token(&jwt).unwrap();
    assert_eq!(principal.username, "happy@example.com");
    assert_eq!(principal.authorities, vec!["ROLE_USER"]);

    let header_token = resp.headers().get("X-XSRF-TOKEN").unwrap().to_str().unwrap().to_string();
    let cookies: Vec<_> = resp.response().cookies().collect();
    assert_eq!(cookies.len(), 1, "only the CSRF cookie is set");
    assert_eq!(cookies[0].name(), "XSRF-TOKEN");
    assert_eq!(cookies[0].value(), header_token);
    assert_ne!(cookies[0].http_only(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "happy@example.com");
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_login_with_bad_password_is_unauthorized() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);

    let credentials = BasicCredentials {
        username: "happy@example.com".to_string(),
        password: "wrong-password".to_string(),
    };
    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((header::AUTHORIZATION, credentials.to_header()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::AUTHORIZATION).is_none());
}

#[actix_web::test]
async fn test_jwt_grants_access_to_account_endpoints() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);
    let jwt = login!(app, "happy@example.com");

    let expected = [
        ("/myAccount", "Here are the account details from the DB"),
        ("/myBalance", "Here are the balance details from the DB"),
        ("/myLoans", "Here are the loan details from the DB"),
        ("/myCards", "Here are the card details from the DB"),
    ];
    for (path, body) in expected {
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header((header::AUTHORIZATION, jwt.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", path);
        assert_eq!(test::read_body(resp).await, body);
    }
}

#[actix_web::test]
async fn test_protected_endpoints_require_authentication() {
    let state = test_state();
    let app = init_app!(state);

    for path in ["/myAccount", "/myBalance", "/myLoans", "/myCards", "/user"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", path);
        assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}

#[actix_web::test]
async fn test_roles_are_enforced_per_path() {
    let state = test_state();
    register(&state, "boss@example.com", CustomerRole::Admin).await;
    let app = init_app!(state);
    let jwt = login!(app, "boss@example.com");

    let req = test::TestRequest::get()
        .uri("/myAccount")
        .insert_header((header::AUTHORIZATION, jwt.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/myBalance")
        .insert_header((header::AUTHORIZATION, jwt))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_tampered_jwt_is_rejected() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);
    let jwt = login!(app, "happy@example.com");

    let forged = TokenService::new("some-other-secret-0123456789abcdefgh", "Eazy Bank", 3600)
        .validate_token(&jwt);
    assert!(forged.is_err());

    for token in [format!("{}x", jwt), "garbage".to_string()] {
        let req = test::TestRequest::get()
            .uri("/myAccount")
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_basic_credentials_only_work_on_login() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/myAccount")
        .insert_header((header::AUTHORIZATION, basic("happy@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_test_accounts_cannot_log_in() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((header::AUTHORIZATION, basic("test@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_public_endpoints_allow_anonymous_access() {
    let state = test_state();
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/notices").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Here are the notices details from the DB");

    // no CSRF token needed on /contact
    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({
            "contact_name": "Happy",
            "contact_email": "happy@example.com",
            "subject": "Loan",
            "message": "When can I apply?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Inquiry details are saved to the DB");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unsafe_requests_need_matching_csrf_token() {
    let state = test_state();
    register(&state, "happy@example.com", CustomerRole::User).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header((header::AUTHORIZATION, basic("happy@example.com")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let jwt = resp.headers().get(header::AUTHORIZATION).unwrap().to_str().unwrap().to_string();
    let csrf = resp.headers().get("X-XSRF-TOKEN").unwrap().to_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/myAccount")
        .insert_header((header::AUTHORIZATION, jwt.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/myAccount")
        .insert_header((header::AUTHORIZATION, jwt.clone()))
        .cookie(actix_web::cookie::Cookie::new("XSRF-TOKEN", csrf.clone()))
        .insert_header(("X-XSRF-TOKEN", "forged-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/myAccount")
        .insert_header((header::AUTHORIZATION, jwt))
        .cookie(actix_web::cookie::Cookie::new("XSRF-TOKEN", csrf.clone()))
        .insert_header(("X-XSRF-TOKEN", csrf))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_ne!(resp.status(), StatusCode::FORBIDDEN);
    assert_ne!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_cors_policy() {
    let state = test_state();
    let app = init_app!(state);

    let preflight = |origin: &str, method: &str| {
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/myAccount")
            .insert_header((header::ORIGIN, origin.to_string()))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method.to_string()))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization"))
            .to_request()
    };

    let resp = test::call_service(&app, preflight(ANGULAR_ORIGIN, "GET")).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ANGULAR_ORIGIN
    );
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    let resp = test::call_service(&app, preflight("http://evil.example.com", "GET")).await;
    assert!(!resp.status().is_success());
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    let resp = test::call_service(&app, preflight(ANGULAR_ORIGIN, "POST")).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ANGULAR_ORIGIN
    );

    let resp = test::call_service(&app, preflight(ANGULAR_ORIGIN, "PUT")).await;
    assert!(!resp.status().is_success());

    let req = test::TestRequest::get()
        .uri("/notices")
        .insert_header((header::ORIGIN, ANGULAR_ORIGIN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let exposed = resp
        .headers()
        .get(header::ACCESS_CONTROL_EXPOSE_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(exposed.contains("authorization"));
}

#[actix_web::test]
async fn test_foreign_origin_requests_are_refused() {
    let state = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/notices")
        .insert_header((header::ORIGIN, "http://evil.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(!resp.status().is_success());
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    let req = test::TestRequest::post()
        .uri("/register")
        .insert_header((header::ORIGIN, "http://evil.example.com"))
        .set_json(json!({
            "email": "victim@example.com",
            "mobile_number": "5334122365",
            "pwd": PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(!resp.status().is_success());
    assert!(state.customer_service.find_by_email("victim@example.com").await.is_err());
}
