use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod auth;
pub mod calendar;
pub mod categories;
pub mod main;
pub mod stickers;
pub mod tasks;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Map a service error to its JSON HTTP rendering.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(ErrorBody {
            error: "Unauthorized",
        }),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody { error: "Not found" }),
        ServiceError::InvalidInput(message) => {
            HttpResponse::BadRequest().json(ErrorBody {
                error: message.as_str(),
            })
        }
        ServiceError::Unavailable => HttpResponse::ServiceUnavailable().json(ErrorBody {
            error: "Temporarily unavailable",
        }),
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}
