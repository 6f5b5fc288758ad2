use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use showcase_core::{CatalogError, CriteriaError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Invalid session ID: {0}")]
    InvalidSessionId(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl actix_web::error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!("API error: {:?}", self);

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({
                "error": self.to_string(),
            }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Criteria(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidSessionId(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::ProjectNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
