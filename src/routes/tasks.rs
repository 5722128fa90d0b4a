use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::types::EventId;
use crate::forms::tasks::{AddTaskForm, AddTaskPayload, UpdateTaskForm, UpdateTaskPayload};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::ServiceError;
use crate::services::tasks::{
    add_task as add_task_service, delete_task as delete_task_service,
    list_tasks_for_day as list_tasks_service, toggle_task as toggle_task_service,
    update_task as update_task_service,
};

#[derive(Serialize)]
struct TaskCreatedBody {
    success: bool,
    task_id: String,
}

#[derive(Serialize)]
struct ToggleBody {
    success: bool,
    is_completed: bool,
}

#[derive(Serialize)]
struct SuccessBody {
    success: bool,
}

/// Task identifiers cross the boundary as opaque string tokens.
fn parse_task_token(raw: &str) -> Result<EventId, ServiceError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| EventId::new(id).ok())
        .ok_or_else(|| ServiceError::InvalidInput("invalid task id".to_string()))
}

#[get("/tasks/{date}")]
pub async fn get_tasks(
    date: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_tasks_service(&user, &date.into_inner(), repo.get_ref()) {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(err) => service_error_response(&err),
    }
}

#[post("/tasks")]
pub async fn add_task(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTaskForm>,
) -> impl Responder {
    let payload: AddTaskPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match add_task_service(payload, &user, repo.get_ref()) {
        Ok(task_id) => HttpResponse::Ok().json(TaskCreatedBody {
            success: true,
            task_id,
        }),
        Err(err) => service_error_response(&err),
    }
}

#[post("/tasks/{task_id}/update")]
pub async fn update_task(
    task_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateTaskForm>,
) -> impl Responder {
    let task_id = match parse_task_token(&task_id) {
        Ok(id) => id,
        Err(err) => return service_error_response(&err),
    };
    let payload: UpdateTaskPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(&ServiceError::from(e)),
    };

    match update_task_service(task_id, payload, &user, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessBody { success: true }),
        Err(err) => service_error_response(&err),
    }
}

#[post("/tasks/{task_id}/toggle")]
pub async fn toggle_task(
    task_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let task_id = match parse_task_token(&task_id) {
        Ok(id) => id,
        Err(err) => return service_error_response(&err),
    };

    match toggle_task_service(task_id, &user, repo.get_ref()) {
        Ok(is_completed) => HttpResponse::Ok().json(ToggleBody {
            success: true,
            is_completed,
        }),
        Err(err) => service_error_response(&err),
    }
}

#[post("/tasks/{task_id}/delete")]
pub async fn delete_task(
    task_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let task_id = match parse_task_token(&task_id) {
        Ok(id) => id,
        Err(err) => return service_error_response(&err),
    };

    match delete_task_service(task_id, &user, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(SuccessBody { success: true }),
        Err(err) => service_error_response(&err),
    }
}
