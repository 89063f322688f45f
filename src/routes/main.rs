use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Responder, get};
use serde_json::json;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Serves the static UI entry point, or a hint when it is not deployed.
#[get("/")]
pub async fn show_index(req: HttpRequest) -> HttpResponse {
    match NamedFile::open_async("./static/index.html").await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::Ok().json(json!({
            "message": "Static UI not found. Create static/index.html"
        })),
    }
}
