use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;

/// Multipart payload accepted by the file-upload passthrough.
#[derive(Debug, MultipartForm)]
pub struct UploadFileForm {
    /// Display name of the product the file belongs to.
    #[multipart(rename = "productName")]
    pub product_name: Text<String>,
    /// The uploaded file itself.
    pub file: TempFile,
}
