//! HTTP API for the browser client
//! Versioned response envelope, permissive CORS, and catalog fallback when
//! the model path is unavailable

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::catalog::PlantCatalog;
use crate::error::{AppError, ErrorCategory};
use crate::garden::{self, GardenPlan, Purpose, SpaceSize};
use crate::gemini::{GeminiClient, GeminiError};
use crate::model::PlantFact;
use crate::normalize::{self, NormalizeError, UNKNOWN_PLANT};
use crate::prompts;
use crate::validation;

pub const SERVICE_CONTRACT_VERSION: &str = "plantassist.v1";

/// Shared handler state. `gemini` is `None` when no API key is configured;
/// the service then answers from the catalog only.
#[derive(Clone, Default)]
pub struct ApiState {
    pub gemini: Option<Arc<GeminiClient>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceEnvelope<T>
where
    T: Serialize,
{
    service_contract_version: &'static str,
    data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceError {
    service_contract_version: &'static str,
    error: AppError,
}

impl From<AppError> for ServiceError {
    fn from(error: AppError) -> Self {
        Self { service_contract_version: SERVICE_CONTRACT_VERSION, error }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self.error.category {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Network | ErrorCategory::Model => StatusCode::BAD_GATEWAY,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn envelope<T>(data: T) -> ServiceEnvelope<T>
where
    T: Serialize,
{
    ServiceEnvelope { service_contract_version: SERVICE_CONTRACT_VERSION, data }
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub key: &'static str,
    pub fact: PlantFact,
}

/// Where a plant-info answer came from, so the client can tell AI output
/// apart from fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactSource {
    Model,
    Catalog,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfoResponse {
    pub fact: PlantFact,
    pub source: FactSource,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfoRequest {
    pub plant_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyRequest {
    pub image_data: String,
    pub image_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyResponse {
    pub plant_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlanRequest {
    pub space_size: SpaceSize,
    pub custom_area: Option<f64>,
    pub purpose: Purpose,
}

pub fn app(state: ApiState) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/plants", get(plants_list))
        .route("/v1/plants/:query", get(plants_resolve))
        .route("/v1/plant-info", post(plant_info))
        .route("/v1/identify", post(identify))
        .route("/v1/garden-plan", post(garden_plan))
        .layer(middleware::from_fn(with_cors))
        .with_state(state)
}

// The browser client is served from a different origin, so every response
// carries permissive CORS headers and preflights short-circuit here.
async fn with_cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return apply_cors((StatusCode::NO_CONTENT, ()).into_response());
    }
    apply_cors(next.run(request).await)
}

fn apply_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("authorization, x-client-info, apikey, content-type"),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    response
}

// Upstream text is bounded before any parsing; a response this large is
// never a usable record.
fn check_model_text(text: String) -> Result<String, GeminiError> {
    if text.len() > validation::MAX_RESPONSE_TEXT_BYTES {
        return Err(GeminiError::Api(format!(
            "response too large: {} bytes (max: {} bytes)",
            text.len(),
            validation::MAX_RESPONSE_TEXT_BYTES
        )));
    }
    Ok(text)
}

async fn health() -> Json<ServiceEnvelope<HealthResponse>> {
    Json(envelope(HealthResponse { status: "ok" }))
}

async fn plants_list() -> Json<ServiceEnvelope<Vec<CatalogEntry>>> {
    let entries = PlantCatalog::global()
        .entries()
        .map(|(key, fact)| CatalogEntry { key, fact: fact.clone() })
        .collect();
    Json(envelope(entries))
}

async fn plants_resolve(
    Path(query): Path<String>,
) -> Result<Json<ServiceEnvelope<PlantInfoResponse>>, ServiceError> {
    validation::validate_non_empty(&query).map_err(AppError::from)?;
    validation::validate_text_size(&query, validation::MAX_PLANT_NAME_BYTES)
        .map_err(AppError::from)?;

    let fact = PlantCatalog::global()
        .resolve(&query)
        .ok_or_else(|| AppError::plant_not_found(&query))?;
    Ok(Json(envelope(PlantInfoResponse { fact: fact.clone(), source: FactSource::Catalog })))
}

async fn plant_info(
    State(state): State<ApiState>,
    Json(request): Json<PlantInfoRequest>,
) -> Result<Json<ServiceEnvelope<PlantInfoResponse>>, ServiceError> {
    validation::validate_non_empty(&request.plant_name).map_err(AppError::from)?;
    validation::validate_text_size(&request.plant_name, validation::MAX_PLANT_NAME_BYTES)
        .map_err(AppError::from)?;

    let mut ai_failure: Option<AppError> = None;

    if let Some(client) = &state.gemini {
        let prompt = prompts::plant_info_prompt(&request.plant_name);
        tracing::debug!(
            plant_name = %request.plant_name,
            template_version = prompts::PROMPT_TEMPLATE_VERSION,
            "requesting plant info from model"
        );

        match client.generate(&prompt).await.and_then(check_model_text) {
            Ok(text) => match normalize::normalize(&text) {
                Ok(fact) => {
                    return Ok(Json(envelope(PlantInfoResponse {
                        fact,
                        source: FactSource::Model,
                    })));
                }
                Err(err @ NormalizeError::SchemaMismatch(_)) => {
                    tracing::warn!(error = %err, "model answer failed schema validation - possible prompt drift");
                    ai_failure = Some(err.into());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "model answer was not valid JSON");
                    ai_failure = Some(err.into());
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "generative call failed, falling back to catalog");
                ai_failure = Some(err.into());
            }
        }
    }

    match PlantCatalog::global().resolve(&request.plant_name) {
        Some(fact) => {
            Ok(Json(envelope(PlantInfoResponse { fact: fact.clone(), source: FactSource::Catalog })))
        }
        None => Err(ai_failure
            .unwrap_or_else(|| AppError::plant_not_found(&request.plant_name))
            .into()),
    }
}

async fn identify(
    State(state): State<ApiState>,
    Json(request): Json<IdentifyRequest>,
) -> Result<Json<ServiceEnvelope<IdentifyResponse>>, ServiceError> {
    validation::validate_image_type(&request.image_type).map_err(AppError::from)?;
    validation::validate_image_payload(&request.image_data).map_err(AppError::from)?;

    let client = state.gemini.as_ref().ok_or_else(AppError::model_unavailable)?;

    let text = client
        .generate_with_image(prompts::IDENTIFY_IMAGE_PROMPT, &request.image_data, &request.image_type)
        .await
        .map_err(AppError::from)?;

    // A "name" longer than the query cap is prompt-echo garbage, not a plant.
    let name = normalize::normalize_image_identification(&text);
    let plant_name = if name.is_empty()
        || name == UNKNOWN_PLANT
        || name.len() > validation::MAX_PLANT_NAME_BYTES
    {
        None
    } else {
        Some(name)
    };

    Ok(Json(envelope(IdentifyResponse { plant_name })))
}

async fn garden_plan(
    State(state): State<ApiState>,
    Json(request): Json<GardenPlanRequest>,
) -> Result<Json<ServiceEnvelope<GardenPlan>>, ServiceError> {
    let area_sqft = match request.space_size.preset_area() {
        Some(area) => area,
        None => {
            let area = request.custom_area.ok_or_else(|| AppError::empty_input("customArea"))?;
            validation::validate_custom_area(area).map_err(AppError::from)?;
            area
        }
    };

    if garden::plant_capacity(area_sqft) < 1 {
        return Err(AppError::invalid_format(
            "Area is too small for any plants. Minimum 1.5 sq.ft required.",
        )
        .into());
    }

    let ai = match &state.gemini {
        Some(client) => {
            let prompt = prompts::garden_plan_prompt(area_sqft, request.purpose);
            match client.generate(&prompt).await.and_then(check_model_text) {
                Ok(text) => match normalize::normalize_garden_plan(&text) {
                    Ok(plan) => Some(plan),
                    Err(err) => {
                        tracing::warn!(error = %err, "garden-plan answer unusable, serving fallback plan");
                        None
                    }
                },
                Err(err) => {
                    tracing::warn!(error = %err, "garden-plan call failed, serving fallback plan");
                    None
                }
            }
        }
        None => None,
    };

    let plan = garden::build_plan(request.space_size, area_sqft, request.purpose, ai);
    Ok(Json(envelope(plan)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::Request;
    use tower::ServiceExt;

    fn offline_app() -> Router {
        app(ApiState::default())
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read response body");
        serde_json::from_slice(&bytes).expect("response body is JSON")
    }

    fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("build request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .expect("build request")
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = offline_app().oneshot(get_request("/v1/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = response_json(response).await;
        assert_eq!(value["service_contract_version"], SERVICE_CONTRACT_VERSION);
        assert_eq!(value["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_preflight_gets_cors_headers() {
        let request = Request::builder()
            .uri("/v1/plant-info")
            .method("OPTIONS")
            .body(Body::empty())
            .unwrap();
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_regular_responses_carry_cors_headers() {
        let response = offline_app().oneshot(get_request("/v1/health")).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_plants_list_returns_catalog() {
        let response = offline_app().oneshot(get_request("/v1/plants")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = response_json(response).await;
        let entries = value["data"].as_array().expect("entries array");
        assert!(entries.len() >= 15);
        assert_eq!(entries[0]["key"], "peace lily");
        assert_eq!(entries[0]["fact"]["name"], "Peace Lily");
    }

    #[tokio::test]
    async fn test_plants_resolve_substring() {
        let response = offline_app().oneshot(get_request("/v1/plants/lily")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = response_json(response).await;
        assert_eq!(value["data"]["fact"]["name"], "Peace Lily");
        assert_eq!(value["data"]["source"], "catalog");
    }

    #[tokio::test]
    async fn test_plants_resolve_unknown_is_not_found() {
        let response = offline_app()
            .oneshot(get_request("/v1/plants/zzz-not-a-plant"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value = response_json(response).await;
        assert_eq!(value["error"]["code"], "NOT_FOUND_PLANT");
        assert_eq!(value["error"]["category"], "not_found");
    }

    #[tokio::test]
    async fn test_plant_info_without_model_falls_back_to_catalog() {
        let request = post_json("/v1/plant-info", serde_json::json!({ "plantName": "Snake Plant" }));
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = response_json(response).await;
        assert_eq!(value["data"]["source"], "catalog");
        assert_eq!(value["data"]["fact"]["scientificName"], "Sansevieria trifasciata");
    }

    #[tokio::test]
    async fn test_plant_info_empty_name_is_rejected() {
        let request = post_json("/v1/plant-info", serde_json::json!({ "plantName": "   " }));
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = response_json(response).await;
        assert_eq!(value["error"]["code"], "VALIDATION_EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_plant_info_unknown_plant_is_not_found() {
        let request = post_json("/v1/plant-info", serde_json::json!({ "plantName": "zzz-not-a-plant" }));
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_identify_without_model_is_unavailable() {
        let request = post_json(
            "/v1/identify",
            serde_json::json!({ "imageData": "aGVsbG8=", "imageType": "image/jpeg" }),
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let value = response_json(response).await;
        assert_eq!(value["error"]["code"], "MODEL_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_identify_rejects_bad_mime_type() {
        let request = post_json(
            "/v1/identify",
            serde_json::json!({ "imageData": "aGVsbG8=", "imageType": "text/html" }),
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_garden_plan_without_model_serves_fallback() {
        let request = post_json(
            "/v1/garden-plan",
            serde_json::json!({ "spaceSize": "small", "purpose": "air" }),
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = response_json(response).await;
        assert_eq!(value["data"]["space"]["totalPlants"], 10);
        assert_eq!(value["data"]["plants"].as_array().unwrap().len(), 0);
        assert!(value["data"]["arrangement"]["layout"].as_str().unwrap().contains("16"));
        assert_eq!(value["data"]["maintenance"]["overview"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_garden_plan_custom_requires_area() {
        let request = post_json(
            "/v1/garden-plan",
            serde_json::json!({ "spaceSize": "custom", "purpose": "flower" }),
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = response_json(response).await;
        assert_eq!(value["error"]["code"], "VALIDATION_EMPTY_INPUT");
    }

    #[tokio::test]
    async fn test_garden_plan_rejects_area_below_one_plant() {
        let request = post_json(
            "/v1/garden-plan",
            serde_json::json!({ "spaceSize": "custom", "customArea": 1.0, "purpose": "mixed" }),
        );
        let response = offline_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = response_json(response).await;
        assert!(value["error"]["message"].as_str().unwrap().contains("too small"));
    }
}
