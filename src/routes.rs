use actix_web::{post, web, HttpResponse};
use serde::Serialize;

use crate::balance::compute_balance_from_group;
use crate::error::BalanceError;
use crate::schemas::Group;
use crate::summary::summarize;

#[derive(Serialize)]
struct ErrorJson {
    error: String,
}

fn rejected(err: BalanceError) -> HttpResponse {
    tracing::info!("balance request rejected: {err}");
    HttpResponse::UnprocessableEntity().json(ErrorJson {
        error: err.to_string(),
    })
}

#[post("/balance")]
async fn balance(group: web::Json<Group>) -> HttpResponse {
    match compute_balance_from_group(&group) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => rejected(err),
    }
}

#[post("/balance/summary")]
async fn balance_summary(group: web::Json<Group>) -> HttpResponse {
    match compute_balance_from_group(&group) {
        Ok(report) => HttpResponse::Ok().json(summarize(&group.members, &report)),
        Err(err) => rejected(err),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(balance).service(balance_summary);
}
