use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::files::UploadFileForm;
use crate::services::files::{LocalFileStorage, store_upload};

#[post("/files/upload")]
pub async fn upload_file(
    storage: web::Data<LocalFileStorage>,
    MultipartForm(form): MultipartForm<UploadFileForm>,
) -> impl Responder {
    match store_upload(storage.get_ref(), form) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(err) => {
            log::error!("Failed to store uploaded file: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
