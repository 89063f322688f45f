use actix_web::{HttpRequest, HttpResponse, Scope, error, web};

pub mod containers;
pub mod files;
pub mod main;
pub mod products;

/// All JSON API handlers, mounted under `/api`.
///
/// Shared between `main.rs` and the HTTP integration tests so both always
/// serve the same surface.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(main::health)
        .service(containers::list_containers)
        .service(containers::create_container)
        .service(containers::update_container)
        .service(containers::delete_container)
        .service(products::add_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(files::upload_file)
}

/// Maps malformed JSON bodies to a 422 with a `detail` payload instead of
/// the default 400, matching the validation status the API promises.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(serde_json::json!({ "detail": detail })),
    )
    .into()
}
