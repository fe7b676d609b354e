//! # Account HTTP Handlers
//!
//! Protected banking endpoints. Access rules are enforced by the security
//! filter chain before these run; the handlers only see authorized
//! principals.
//!
//! | Method | Path | Required role |
//! |--------|------|---------------|
//! | `GET` | `/myAccount` | `USER` |
//! | `GET` | `/myBalance` | `USER` or `ADMIN` |
//! | `GET` | `/myLoans` | `USER` |
//! | `GET` | `/myCards` | `USER` |
//!
//! ```bash
//! curl http://localhost:8080/myAccount \
//!   -H "Authorization: eyJhbGciOiJIUzI1NiJ9..."
//! ```

use actix_web::{get, HttpResponse};
use crate::domain::models::auth::AuthenticatedUser;

#[get("/myAccount")]
pub async fn get_account_details(user: AuthenticatedUser) -> HttpResponse {
    log::debug!("Account details requested by {}", user.username);
    HttpResponse::Ok().body("Here are the account details from the DB")
}

#[get("/myBalance")]
pub async fn get_balance_details(user: AuthenticatedUser) -> HttpResponse {
    log::debug!("Balance details requested by {}", user.username);
    HttpResponse::Ok().body("Here are the balance details from the DB")
}

#[get("/myLoans")]
pub async fn get_loan_details(user: AuthenticatedUser) -> HttpResponse {
    log::debug!("Loan details requested by {}", user.username);
    HttpResponse::Ok().body("Here are the loan details from the DB")
}

#[get("/myCards")]
pub async fn get_card_details(user: AuthenticatedUser) -> HttpResponse {
    log::debug!("Card details requested by {}", user.username);
    HttpResponse::Ok().body("Here are the card details from the DB")
}
