//! HTTP handlers exposing the admin listings as JSON.

use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::ErrorResponse;
use crate::forms::listing::ListQueryForm;
use crate::services::ServiceError;

pub mod service_categories;
pub mod specializations;

/// Registers every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .service(specializations::specialization_statistics)
            .service(specializations::list_specializations)
            .service(specializations::show_specialization)
            .service(service_categories::service_category_statistics)
            .service(service_categories::list_service_categories)
            .service(service_categories::show_service_category),
    );
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Parses the raw query string into the listing form.
pub(crate) fn parse_list_query(query: &str) -> Result<ListQueryForm, HttpResponse> {
    serde_html_form::from_str::<Vec<(String, String)>>(query)
        .map(ListQueryForm::from_pairs)
        .map_err(|err| {
            log::error!("Failed to parse query string {query:?}: {err}");
            HttpResponse::BadRequest().json(ErrorResponse::new("پارامترهای درخواست نامعتبر است"))
        })
}

/// Maps a service failure onto the matching HTTP response.
pub(crate) fn service_error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("مورد درخواستی یافت نشد"))
        }
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Repository(err) => {
            log::error!("{action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
