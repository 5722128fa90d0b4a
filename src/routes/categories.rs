use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::forms::categories::{AddCategoryForm, AddCategoryPayload};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, show_categories as show_categories_service,
};

#[derive(Serialize)]
struct CategoryCreatedBody {
    success: bool,
    id: String,
}

#[get("/categories")]
pub async fn show_categories(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_categories_service(&user, repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response(&err),
    }
}

#[post("/categories")]
pub async fn add_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match add_category_service(payload, &user, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(CategoryCreatedBody {
            success: true,
            id: category.id,
        }),
        Err(err) => service_error_response(&err),
    }
}
