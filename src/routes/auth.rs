use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use chrono::Local;
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::forms::auth::{
    LoginForm, LoginPayload, ProfileUpdateForm, ProfileUpdatePayload, RegisterForm,
    RegisterPayload,
};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::auth::{login_user, register_user};
use crate::services::profile::{show_profile as show_profile_service, update_profile};

#[derive(Serialize)]
struct SuccessBody {
    success: bool,
}

#[post("/register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegisterForm>,
) -> impl Responder {
    let payload: RegisterPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match register_user(payload, repo.get_ref()) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => service_error_response(&err),
    }
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    let payload: LoginPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match login_user(payload, repo.get_ref()) {
        Ok(user) => {
            if let Err(e) = Identity::login(&request.extensions(), user.id.to_string()) {
                log::error!("Failed to establish session identity: {e}");
                return service_error_response(&ServiceError::Internal);
            }
            HttpResponse::Ok().json(SuccessBody { success: true })
        }
        Err(err) => service_error_response(&err),
    }
}

#[post("/logout")]
pub async fn logout(identity: Identity) -> impl Responder {
    identity.logout();
    HttpResponse::Ok().json(SuccessBody { success: true })
}

#[get("/profile")]
pub async fn show_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let today = Local::now().date_naive();
    match show_profile_service(&user, today, repo.get_ref()) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => service_error_response(&err),
    }
}

#[post("/profile")]
pub async fn edit_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProfileUpdateForm>,
) -> impl Responder {
    let payload: ProfileUpdatePayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match update_profile(payload, &user, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessBody { success: true }),
        Err(err) => service_error_response(&err),
    }
}
