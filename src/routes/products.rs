use actix_web::{HttpResponse, Responder, delete, post, put, web};
use serde_json::json;

use crate::forms::products::ProductForm;
use crate::repository::JsonStore;
use crate::services::{ServiceError, products};
use crate::sync::ContainerMirror;

#[post("/containers/{container_id}/products")]
pub async fn add_product(
    store: web::Data<JsonStore>,
    mirror: web::Data<dyn ContainerMirror>,
    path: web::Path<i64>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    let container_id = path.into_inner();
    match products::add_product(
        store.get_ref(),
        mirror.get_ref(),
        container_id,
        form.into_inner(),
    ) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err @ ServiceError::ContainerNotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        Err(ServiceError::Form(detail)) => {
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
        }
        Err(err) => {
            log::error!("Failed to add product to container {container_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/containers/{container_id}/products/{product_id}")]
pub async fn update_product(
    store: web::Data<JsonStore>,
    path: web::Path<(i64, i64)>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    let (container_id, product_id) = path.into_inner();
    match products::update_product(store.get_ref(), container_id, product_id, form.into_inner()) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err @ (ServiceError::ContainerNotFound | ServiceError::ProductNotFound)) => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        Err(ServiceError::Form(detail)) => {
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail }))
        }
        Err(err) => {
            log::error!("Failed to update product {product_id} in container {container_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/containers/{container_id}/products/{product_id}")]
pub async fn delete_product(
    store: web::Data<JsonStore>,
    path: web::Path<(i64, i64)>,
) -> impl Responder {
    let (container_id, product_id) = path.into_inner();
    match products::delete_product(store.get_ref(), container_id, product_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err @ (ServiceError::ContainerNotFound | ServiceError::ProductNotFound)) => {
            HttpResponse::NotFound().json(json!({ "detail": err.to_string() }))
        }
        Err(err) => {
            log::error!("Failed to delete product {product_id} in container {container_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
