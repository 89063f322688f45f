use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::forms::containers::{CreateContainerForm, UpdateContainerForm};
use crate::repository::JsonStore;
use crate::services::{ServiceError, containers};
use crate::sync::ContainerMirror;

#[get("/containers")]
pub async fn list_containers(store: web::Data<JsonStore>) -> impl Responder {
    match containers::list_containers(store.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => {
            log::error!("Failed to list containers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/containers")]
pub async fn create_container(
    store: web::Data<JsonStore>,
    mirror: web::Data<dyn ContainerMirror>,
    form: web::Json<CreateContainerForm>,
) -> impl Responder {
    match containers::create_container(store.get_ref(), mirror.get_ref(), form.into_inner()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(ServiceError::Form(detail)) => {
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
        }
        Err(err) => {
            log::error!("Failed to create container: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/containers/{container_id}")]
pub async fn update_container(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    form: web::Json<UpdateContainerForm>,
) -> impl Responder {
    let container_id = path.into_inner();
    match containers::update_container(store.get_ref(), container_id, form.into_inner()) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err @ ServiceError::ContainerNotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        Err(err) => {
            log::error!("Failed to update container {container_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/containers/{container_id}")]
pub async fn delete_container(store: web::Data<JsonStore>, path: web::Path<i64>) -> impl Responder {
    let container_id = path.into_inner();
    match containers::delete_container(store.get_ref(), container_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err @ ServiceError::ContainerNotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        Err(err) => {
            log::error!("Failed to delete container {container_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
