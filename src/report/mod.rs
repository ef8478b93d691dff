//! src/report/mod.rs

mod client;
mod prompt;

pub use client::ReportClient;
pub use prompt::{build_prompt, Prompt, ReportType};

use crate::error::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use reqwest::StatusCode as UpstreamStatus;

/// Every report failure is answered with `500 {"error": "<message>"}`.
#[derive(thiserror::Error)]
pub enum ReportError {
    #[error("Report gateway API key not configured")]
    MissingApiKey,
    #[error("Invalid report request: {0}")]
    InvalidRequest(#[source] serde_json::Error),
    #[error("AI Gateway error: {}", .0.as_u16())]
    Gateway(UpstreamStatus),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ReportError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
