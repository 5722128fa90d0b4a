use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::repository::DieselRepository;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Liveness probe: verifies a pooled store connection can still be obtained.
#[get("/health")]
pub async fn health(repo: web::Data<DieselRepository>) -> impl Responder {
    match repo.ping() {
        Ok(()) => HttpResponse::Ok().json(HealthBody { status: "ok" }),
        Err(e) => {
            log::error!("Health check failed: {e}");
            HttpResponse::ServiceUnavailable().json(HealthBody {
                status: "unavailable",
            })
        }
    }
}
