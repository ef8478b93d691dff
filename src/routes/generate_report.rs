//! src/routes/generate_report.rs

use crate::report::{build_prompt, ReportClient, ReportError, ReportType};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

#[derive(serde::Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "reportType", default)]
    report_type: serde_json::Value,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(serde::Serialize)]
struct ReportResponse {
    report: String,
}

/// `/generate-report`: POST generates, OPTIONS answers preflight requests.
/// Every response allows any origin.
pub fn generate_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-report")
            .wrap(
                DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS)),
            )
            .route(web::post().to(generate_report))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[tracing::instrument(
    name = "Generate a report",
    skip(body, report_client),
    fields(report_type = tracing::field::Empty)
)]
pub async fn generate_report(
    body: web::Bytes,
    report_client: web::Data<ReportClient>,
) -> Result<HttpResponse, ReportError> {
    match try_generate_report(&body, &report_client).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ReportResponse { report })),
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Error generating report"
            );
            Err(e)
        }
    }
}

async fn try_generate_report(
    body: &[u8],
    report_client: &ReportClient,
) -> Result<String, ReportError> {
    // parsed by hand: a malformed body is answered like every other failure
    let request: ReportRequest =
        serde_json::from_slice(body).map_err(ReportError::InvalidRequest)?;
    let report_type = ReportType::from_json(request.report_type);
    tracing::Span::current().record("report_type", report_type.as_str());
    let prompt = build_prompt(report_type, &request.data);
    report_client.generate(&prompt).await
}
