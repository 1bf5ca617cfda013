use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::repository::JsonRepository;
use crate::routes::{parse_list_query, service_error_response};
use crate::services::specializations as specializations_service;

#[get("/v1/specializations")]
pub async fn list_specializations(
    req: HttpRequest,
    repo: web::Data<JsonRepository>,
) -> impl Responder {
    let form = match parse_list_query(req.query_string()) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let today = Utc::now().date_naive();
    match specializations_service::list_specializations(repo.get_ref(), form, today) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => service_error_response(err, "Failed to list specializations"),
    }
}

#[get("/v1/specializations/statistics")]
pub async fn specialization_statistics(repo: web::Data<JsonRepository>) -> impl Responder {
    let today = Utc::now().date_naive();
    match specializations_service::specialization_statistics(repo.get_ref(), today) {
        Ok(statistics) => HttpResponse::Ok().json(statistics),
        Err(err) => service_error_response(err, "Failed to count specializations"),
    }
}

#[get("/v1/specializations/{specialization_id}")]
pub async fn show_specialization(
    specialization_id: web::Path<i32>,
    repo: web::Data<JsonRepository>,
) -> impl Responder {
    match specializations_service::get_specialization(
        repo.get_ref(),
        specialization_id.into_inner(),
    ) {
        Ok(specialization) => HttpResponse::Ok().json(specialization),
        Err(err) => service_error_response(err, "Failed to load specialization"),
    }
}
