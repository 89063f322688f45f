use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use import_tracker::repository::JsonStore;
use import_tracker::routes::{api_scope, json_error_handler};
use import_tracker::services::files::LocalFileStorage;
use import_tracker::sync::{ContainerMirror, NullMirror};

/// Builds the same application `main.rs` serves, backed by the given store.
macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data($store.clone())
                .app_data(web::Data::from(
                    Arc::new(NullMirror) as Arc<dyn ContainerMirror>
                ))
                .service(api_scope()),
        )
        .await
    };
}

fn container_payload(name: &str) -> Value {
    json!({
        "name": name,
        "orderDate": "2023-01-01",
        "productionDays": "10",
    })
}

fn product_payload(name: &str) -> Value {
    json!({
        "name": name,
        "quantity": "100",
        "totalPrice": "5000",
        "totalPriceCurrency": "USD",
    })
}

#[actix_web::test]
async fn health_reports_ok() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn create_container_computes_the_pickup_date() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(json!({
            "name": "Test Container 1",
            "orderDate": "2023-01-01",
            "productionDays": "30",
            "exchangeRate": "4.0",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Test Container 1");
    assert!(body["id"].is_i64());
    assert_eq!(body["pickupDate"], "2023-01-31");
    // Unset fields come back with their documented defaults.
    assert_eq!(body["containerCostCurrency"], "USD");
    assert_eq!(body["containerCost"], "");
    assert_eq!(body["pickedUpInChina"], false);
    assert_eq!(body["products"], json!([]));
}

#[actix_web::test]
async fn create_container_with_huge_production_days_leaves_pickup_date_unset() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(json!({
            "name": "C1",
            "orderDate": "2023-01-01",
            "productionDays": "1e18",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pickupDate"], Value::Null);

    // The store stays usable afterwards.
    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let containers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(containers.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn create_container_rejects_incomplete_payloads() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    // Missing required key.
    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(json!({ "name": "C1", "productionDays": "30" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Present but empty required field.
    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(json!({ "name": "", "orderDate": "2023-01-01", "productionDays": "30" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was persisted.
    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn update_container_merges_and_recomputes() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();
    assert_eq!(created["pickupDate"], "2023-01-11");

    let req = test::TestRequest::put()
        .uri(&format!("/api/containers/{container_id}"))
        .set_json(json!({ "name": "C1 Updated", "productionDays": "20" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "C1 Updated");
    assert_eq!(body["productionDays"], "20");
    assert_eq!(body["orderDate"], "2023-01-01");
    assert_eq!(body["pickupDate"], "2023-01-21");
    assert_eq!(body["id"].as_i64(), Some(container_id));
}

#[actix_web::test]
async fn update_container_distinguishes_cleared_from_omitted_dates() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/containers/{container_id}"))
        .set_json(json!({ "paymentDate": "2023-01-05" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["paymentDate"], "2023-01-05");

    // Omitting the key keeps the stored value.
    let req = test::TestRequest::put()
        .uri(&format!("/api/containers/{container_id}"))
        .set_json(json!({ "name": "C1 Renamed" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["paymentDate"], "2023-01-05");

    // An explicit null clears it.
    let req = test::TestRequest::put()
        .uri(&format!("/api/containers/{container_id}"))
        .set_json(json!({ "paymentDate": null }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["paymentDate"], Value::Null);
}

#[actix_web::test]
async fn update_container_returns_404_for_unknown_ids() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::put()
        .uri("/api/containers/999999")
        .set_json(json!({ "name": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Container not found");
}

#[actix_web::test]
async fn add_product_and_list_containers() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/containers/{container_id}/products"))
        .set_json(product_payload("Product A"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let product: Value = test::read_body_json(resp).await;
    assert_eq!(product["name"], "Product A");
    assert!(product["id"].is_i64());

    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let containers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(containers.as_array().unwrap().len(), 1);
    let products = containers[0]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Product A");
}

#[actix_web::test]
async fn add_product_to_unknown_container_returns_404() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers/999999/products")
        .set_json(product_payload("Product A"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Container not found");
}

#[actix_web::test]
async fn update_product_preserves_the_id() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/containers/{container_id}/products"))
        .set_json(json!({ "name": "P1", "quantity": "1", "totalPrice": "10" }))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = product["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/containers/{container_id}/products/{product_id}"
        ))
        .set_json(json!({
            "name": "P1 Updated",
            "quantity": "2",
            "totalPrice": "20",
            "totalPriceCurrency": "USD",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "P1 Updated");
    assert_eq!(body["quantity"], "2");
    assert_eq!(body["id"].as_i64(), Some(product_id));

    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let containers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(containers[0]["products"][0]["name"], "P1 Updated");
}

#[actix_web::test]
async fn product_updates_report_the_right_missing_entity() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    // Container checked first.
    let req = test::TestRequest::put()
        .uri("/api/containers/999999/products/123")
        .set_json(json!({ "name": "X", "quantity": "1", "totalPrice": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Container not found");

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/containers/{container_id}/products/999999"))
        .set_json(json!({ "name": "X", "quantity": "1", "totalPrice": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Product not found");
}

#[actix_web::test]
async fn delete_product_removes_it_from_the_container() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/containers/{container_id}/products"))
        .set_json(json!({ "name": "P1", "quantity": "1", "totalPrice": "10" }))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = product["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/containers/{container_id}/products/{product_id}"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let containers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(containers[0]["products"], json!([]));

    // Deleting it again reports the product, not the container.
    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/containers/{container_id}/products/{product_id}"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Product not found");
}

#[actix_web::test]
async fn delete_container_is_atomic_and_not_idempotent() {
    let store = web::Data::new(JsonStore::in_memory());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/api/containers")
        .set_json(container_payload("C1"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let container_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/containers/{container_id}/products"))
        .set_json(product_payload("P1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/containers/{container_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/containers").to_request();
    let containers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(containers, json!([]));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/containers/{container_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Container not found");
}

#[actix_web::test]
async fn upload_file_returns_a_retrievable_url() {
    let store = web::Data::new(JsonStore::in_memory());
    let files_dir = tempfile::tempdir().unwrap();
    let storage = web::Data::new(LocalFileStorage::new(files_dir.path()));
    let app = test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(store.clone())
            .app_data(web::Data::from(
                Arc::new(NullMirror) as Arc<dyn ContainerMirror>
            ))
            .app_data(storage.clone())
            .service(api_scope()),
    )
    .await;

    let boundary = "----import-tracker-test";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"productName\"\r\n\r\n\
         Test Product\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"test.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         dummy content\r\n\
         --{boundary}--\r\n"
    );

    let req = test::TestRequest::post()
        .uri("/api/files/upload")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let uploaded: Value = test::read_body_json(resp).await;
    assert_eq!(uploaded["filename"], "test.txt");
    let url = uploaded["url"].as_str().unwrap();
    assert!(url.starts_with("/files/"));
    assert!(url.ends_with("_test.txt"));

    let stored = files_dir.path().join(url.trim_start_matches("/files/"));
    assert_eq!(std::fs::read(stored).unwrap(), b"dummy content");
}
