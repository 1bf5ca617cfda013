use actix_web::{App, http::StatusCode, test, web};
use clinic_admin::repository::JsonRepository;
use clinic_admin::routes::configure;
use serde_json::Value;

mod common;

fn repo() -> JsonRepository {
    JsonRepository::from_snapshot(common::clinic_snapshot()).expect("valid snapshot")
}

#[actix_web::test]
async fn lists_specializations_with_statistics() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations?sort=displayorder&per_page=10&page=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["page"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Derma", "Cardiology"]);
    assert_eq!(body["page"]["total"], 2);
    assert_eq!(body["page"]["total_pages"], 1);
    assert_eq!(body["statistics"]["total"], 3);
    assert_eq!(body["statistics"]["active"], 1);
    assert_eq!(body["statistics"]["inactive"], 1);
    assert_eq!(body["statistics"]["deleted"], 1);
}

#[actix_web::test]
async fn search_is_case_insensitive() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations?search=DERM")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["page"]["total"], 1);
    assert_eq!(body["page"]["items"][0]["name"], "Derma");
}

#[actix_web::test]
async fn invalid_date_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations?created_from=not-a-date")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn show_and_missing_specialization() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations/2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Derma");

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations/42")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn statistics_endpoint_ignores_query() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/service-categories/statistics?is_active=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 2);
    assert_eq!(body["active"], 1);
    assert_eq!(body["inactive"], 1);
    assert_eq!(body["deleted"], 0);
}

#[actix_web::test]
async fn repeated_paging_keys_use_last_value() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations?page=1&page=2&sort=name&sort=bogus")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"]["page"], 2);
    assert_eq!(body["page"]["total"], 2);
    assert!(body["page"]["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn non_positive_id_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/specializations/0")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn lists_service_categories() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/service-categories")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body["page"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laboratory", "Imaging"]);
    assert_eq!(body["statistics"]["total"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/service-categories?is_active=false")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["page"]["total"], 1);
    assert_eq!(body["page"]["items"][0]["name"], "Imaging");
}

#[actix_web::test]
async fn show_and_missing_service_category() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/service-categories/1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Laboratory");

    let req = test::TestRequest::get()
        .uri("/api/v1/service-categories/99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
