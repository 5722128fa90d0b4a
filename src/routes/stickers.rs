use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::forms::stickers::{AddStickerForm, AddStickerPayload};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::stickers::{
    add_sticker as add_sticker_service, show_stickers as show_stickers_service,
};

#[derive(Serialize)]
struct SuccessBody {
    success: bool,
}

#[get("/stickers/{date}")]
pub async fn get_stickers(
    date: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_stickers_service(&user, &date.into_inner(), repo.get_ref()) {
        Ok(stickers) => HttpResponse::Ok().json(stickers),
        Err(err) => service_error_response(&err),
    }
}

#[post("/stickers")]
pub async fn add_sticker(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddStickerForm>,
) -> impl Responder {
    let payload: AddStickerPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match add_sticker_service(payload, &user, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessBody { success: true }),
        Err(err) => service_error_response(&err),
    }
}
