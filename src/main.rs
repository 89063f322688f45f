use std::env;
use std::path::Path;
use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use import_tracker::repository::JsonStore;
use import_tracker::routes::main::show_index;
use import_tracker::routes::{api_scope, json_error_handler};
use import_tracker::services::files::LocalFileStorage;
use import_tracker::sync::{ContainerMirror, NullMirror, SheetMirror, bootstrap};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let data_file = env::var("DATA_FILE").unwrap_or("data/containers.json".to_string());
    let files_dir = env::var("FILES_DIR").unwrap_or("data/files".to_string());
    let sheet_file = env::var("SHEET_FILE").ok().filter(|path| !path.is_empty());
    let sync_on_write = env::var("SYNC_ON_WRITE").map(|flag| flag != "0").unwrap_or(true);
    let bootstrap_from_sheet = env::var("BOOTSTRAP_FROM_SHEET")
        .map(|flag| flag == "1")
        .unwrap_or(false);

    let store = web::Data::new(JsonStore::open(&data_file));

    if bootstrap_from_sheet {
        match &sheet_file {
            Some(path) => bootstrap(store.get_ref(), Path::new(path)),
            None => log::warn!("BOOTSTRAP_FROM_SHEET is set but SHEET_FILE is not"),
        }
    }

    let mirror: Arc<dyn ContainerMirror> = match &sheet_file {
        Some(path) if sync_on_write => Arc::new(SheetMirror::new(path)),
        _ => Arc::new(NullMirror),
    };
    let mirror = web::Data::from(mirror);

    let storage = web::Data::new(LocalFileStorage::new(&files_dir));

    log::info!("listening on {address}:{port}, data file {data_file}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(store.clone())
            .app_data(mirror.clone())
            .app_data(storage.clone())
            .service(Files::new("/static", "./static"))
            .service(Files::new("/files", files_dir.clone()))
            .service(api_scope())
            .service(show_index)
    })
    .bind((address, port))?
    .run()
    .await
}
