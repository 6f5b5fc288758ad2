use crate::error::ApiError;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

/// Renders the `Ok` side of a lookup as a 200 JSON body and lets the error
/// side propagate through `?` as an [`ApiError`](crate::error::ApiError).
///
/// ```ignore
/// ok_json!(catalog.require(&id))
/// ```
#[macro_export]
macro_rules! ok_json {
    ($expr:expr) => {
        Ok($expr.map(|result| actix_web::HttpResponse::Ok().json(result))?)
    };
}

pub mod projects;
pub mod sessions;
pub mod site;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

/// Rejected request bodies answer with the same `{"error"}` shape as handler errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
