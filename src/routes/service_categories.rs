use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::repository::JsonRepository;
use crate::routes::{parse_list_query, service_error_response};
use crate::services::service_categories as service_categories_service;

#[get("/v1/service-categories")]
pub async fn list_service_categories(
    req: HttpRequest,
    repo: web::Data<JsonRepository>,
) -> impl Responder {
    let form = match parse_list_query(req.query_string()) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let today = Utc::now().date_naive();
    match service_categories_service::list_service_categories(repo.get_ref(), form, today) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(err, "Failed to list service categories"),
    }
}

#[get("/v1/service-categories/statistics")]
pub async fn service_category_statistics(repo: web::Data<JsonRepository>) -> impl Responder {
    let today = Utc::now().date_naive();
    match service_categories_service::service_category_statistics(repo.get_ref(), today) {
        Ok(statistics) => HttpResponse::Ok().json(statistics),
        Err(err) => service_error_response(err, "Failed to count service categories"),
    }
}

#[get("/v1/service-categories/{category_id}")]
pub async fn show_service_category(
    category_id: web::Path<i32>,
    repo: web::Data<JsonRepository>,
) -> impl Responder {
    match service_categories_service::get_service_category(repo.get_ref(), category_id.into_inner())
    {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => service_error_response(err, "Failed to load service category"),
    }
}
