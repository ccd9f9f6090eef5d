//! AWS Lambda handler for offer projections
//!
//! Accepts an offer record plus optional parameters via JSON and returns the
//! ten-year projection with the exit-year summary. An optional list of
//! parameter sets is run as extra scenarios against the same offer.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use std::collections::HashMap;
use std::time::Instant;

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use offer_projection::offer::OfferRecord;
use offer_projection::projection::{ProjectionSummary, YearProjection};
use offer_projection::{ProjectionParameters, ScenarioRunner};

/// Input for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Offer record in the offer application's JSON shape
    pub offer: OfferRecord,

    /// Parameters; omitted fields take defaults, omitted entirely uses the offer's slider defaults
    #[serde(default)]
    pub parameters: Option<ProjectionParameters>,

    /// Extra parameter sets to summarize against the same offer
    #[serde(default)]
    pub scenarios: Vec<ProjectionParameters>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub parameters: ProjectionParameters,
    pub years: Vec<YearProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<ScenarioOutput>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioOutput {
    pub parameters: ProjectionParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
}

/// Function URL response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

fn response(status_code: u16, body: Option<String>) -> UrlResponse {
    let headers = [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    UrlResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: false,
    }
}

fn error_response(status_code: u16, message: &str) -> UrlResponse {
    warn!("rejecting request: {}", message);
    response(status_code, Some(serde_json::json!({ "error": message }).to_string()))
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<UrlResponse, Error> {
    let start = Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "base64-encoded bodies are not supported"));
    }

    let body = request.body.as_deref().unwrap_or("{}");
    let parsed: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let offer = match parsed.offer.to_offer() {
        Ok(offer) => offer,
        Err(e) => return Ok(error_response(400, &format!("Invalid offer: {}", e))),
    };

    let parameters = parsed
        .parameters
        .unwrap_or_else(|| ProjectionParameters::for_offer(&offer));
    let runner = ScenarioRunner::with_parameters(parameters);
    let result = runner.run(&offer);

    // An exit year outside 1..=10 still returns the full series
    let (summary, error) = match result.summary() {
        Ok(summary) => (Some(summary), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let scenarios = runner
        .run_scenarios(&offer, &parsed.scenarios)
        .into_iter()
        .zip(&parsed.scenarios)
        .map(|(scenario, params)| ScenarioOutput {
            parameters: *params,
            summary: scenario.summary().ok(),
        })
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!("projected offer in {} ms", execution_time_ms);

    let body = ProjectionResponse {
        parameters,
        years: result.years,
        summary,
        scenarios,
        execution_time_ms,
        error,
    };

    Ok(response(200, Some(serde_json::to_string(&body)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
