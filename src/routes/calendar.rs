use actix_web::{HttpResponse, Responder, get, web};
use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::calendar::build_month;

#[derive(Debug, Deserialize)]
struct CalendarQueryParams {
    year: Option<i32>,
    month: Option<u32>,
}

#[get("/calendar")]
pub async fn show_calendar(
    params: web::Query<CalendarQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // "Today" is the server-local date, both for defaulting the requested
    // month and for the is_today flag.
    let today = Local::now().date_naive();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    match build_month(&user, year, month, today, repo.get_ref()) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => service_error_response(&err),
    }
}
