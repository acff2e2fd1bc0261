//! AI response normalization
//! Converts raw generative-model text into typed records or a typed failure

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::garden::GardenPlanResponse;
use crate::model::PlantFact;

/// Sentinel the identification prompt instructs the model to return when it
/// cannot name the plant. Interpreting it is the caller's job.
pub const UNKNOWN_PLANT: &str = "Unknown Plant";

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The text was not valid JSON at all (prose, truncation, etc.).
    #[error("Response is not valid JSON: {0}")]
    Malformed(String),
    /// The text parsed as JSON but is missing required fields or has wrong
    /// primitive shapes. Logged separately from [`Malformed`] to diagnose
    /// upstream prompt drift.
    ///
    /// [`Malformed`]: NormalizeError::Malformed
    #[error("Response JSON does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

// Matches the fence markers the model wraps JSON in, including the optional
// "json" language tag and one adjacent newline.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```json\n?|\n?```").unwrap()
});

/// Remove Markdown code-fence markers anywhere in the text, then trim.
fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}

fn parse_fenced_json<T: DeserializeOwned>(raw: &str) -> Result<T, NormalizeError> {
    let cleaned = strip_code_fences(raw);
    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| NormalizeError::Malformed(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| NormalizeError::SchemaMismatch(e.to_string()))
}

/// Normalize a plant-info response into a [`PlantFact`].
///
/// Fields are copied verbatim from the parsed JSON: `confidence` is not
/// clamped and `category`/`careLevel` values outside the nominal
/// enumerations pass through unchanged.
pub fn normalize(raw: &str) -> Result<PlantFact, NormalizeError> {
    parse_fenced_json(raw)
}

/// Normalize a garden-plan response into a [`GardenPlanResponse`].
pub fn normalize_garden_plan(raw: &str) -> Result<GardenPlanResponse, NormalizeError> {
    parse_fenced_json(raw)
}

/// Normalize the plain-text image-identification response.
///
/// The model is prompted to answer with just a plant name, so this is a
/// whitespace trim with no JSON parsing. Callers treat [`UNKNOWN_PLANT`] as
/// a not-found signal.
pub fn normalize_image_identification(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CareLevel};

    const ROSE_JSON: &str = r#"{
        "name": "Rose",
        "scientificName": "Rosa chinensis",
        "category": "Flower-based",
        "wateringFrequency": "Every 2 days",
        "waterAmount": "300 ml",
        "sunlight": "Full sun",
        "soilType": "Well-drained loamy soil",
        "season": "Spring",
        "fertilizer": "Every 3-4 weeks with rose feed",
        "careLevel": "Medium",
        "precautions": "Watch for aphids",
        "benefits": ["Fragrant flowers", "Attracts pollinators"],
        "commonIssues": ["Black spot"],
        "growthTime": "3-5 months",
        "confidence": 90
    }"#;

    #[test]
    fn test_normalize_strips_json_fences() {
        let raw = format!("```json\n{ROSE_JSON}\n```");
        let fact = normalize(&raw).expect("fenced payload");
        assert_eq!(fact.name, "Rose");
        assert_eq!(fact.confidence, 90);
        assert_eq!(fact.category, Category::FlowerBased);
    }

    #[test]
    fn test_normalize_strips_untagged_fences() {
        let raw = format!("```\n{ROSE_JSON}\n```");
        let fact = normalize(&raw).expect("untagged fences");
        assert_eq!(fact.name, "Rose");
    }

    #[test]
    fn test_normalize_accepts_bare_json() {
        let fact = normalize(ROSE_JSON).expect("bare payload");
        assert_eq!(fact.scientific_name, "Rosa chinensis");
    }

    #[test]
    fn test_normalize_prose_is_malformed() {
        let err = normalize("not json at all").expect_err("prose");
        assert!(matches!(err, NormalizeError::Malformed(_)));
    }

    #[test]
    fn test_normalize_missing_fields_is_schema_mismatch() {
        let err = normalize(r#"{"name":"Rose"}"#).expect_err("partial object");
        assert!(matches!(err, NormalizeError::SchemaMismatch(_)));
    }

    #[test]
    fn test_normalize_null_is_schema_mismatch() {
        // The info prompt tells the model to answer null for nonexistent
        // plants; that parses as JSON but carries no record.
        let err = normalize("null").expect_err("null payload");
        assert!(matches!(err, NormalizeError::SchemaMismatch(_)));
    }

    #[test]
    fn test_normalize_wrong_primitive_shape_is_schema_mismatch() {
        let raw = ROSE_JSON.replace("\"confidence\": 90", "\"confidence\": \"high\"");
        let err = normalize(&raw).expect_err("string confidence");
        assert!(matches!(err, NormalizeError::SchemaMismatch(_)));
    }

    #[test]
    fn test_normalize_passes_enumeration_drift_through() {
        let raw = ROSE_JSON
            .replace("\"category\": \"Flower-based\"", "\"category\": \"Ornamental\"")
            .replace("\"careLevel\": \"Medium\"", "\"careLevel\": \"moderate\"");
        let fact = normalize(&raw).expect("drifted enums");
        assert_eq!(fact.category, Category::Other("Ornamental".to_string()));
        assert_eq!(fact.care_level, CareLevel::Other("moderate".to_string()));
    }

    #[test]
    fn test_normalize_does_not_clamp_confidence() {
        let raw = ROSE_JSON.replace("\"confidence\": 90", "\"confidence\": 120");
        let fact = normalize(&raw).expect("out-of-range confidence");
        assert_eq!(fact.confidence, 120);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = format!("```json\n{ROSE_JSON}\n```");
        assert_eq!(normalize(&raw).unwrap(), normalize(&raw).unwrap());
    }

    #[test]
    fn test_normalize_garden_plan() {
        let raw = r#"```json
        {
            "recommendations": [
                {
                    "name": "Marigold",
                    "scientificName": "Tagetes erecta",
                    "spacing": "1.5 sq ft",
                    "careInstructions": "Full sun, water every 2-3 days",
                    "whyThisPlant": "Continuous blooms for a flower garden"
                }
            ],
            "layoutSuggestion": "Plant in two staggered rows",
            "maintenanceSchedule": "Deadhead weekly, feed monthly"
        }
        ```"#;
        let plan = normalize_garden_plan(raw).expect("garden plan");
        assert_eq!(plan.recommendations.len(), 1);
        assert_eq!(plan.recommendations[0].name, "Marigold");
        assert_eq!(plan.layout_suggestion, "Plant in two staggered rows");
    }

    #[test]
    fn test_normalize_garden_plan_missing_recommendations() {
        let err = normalize_garden_plan(r#"{"layoutSuggestion":"x"}"#).expect_err("no recs");
        assert!(matches!(err, NormalizeError::SchemaMismatch(_)));
    }

    #[test]
    fn test_image_identification_trims_only() {
        assert_eq!(normalize_image_identification("  Snake Plant  "), "Snake Plant");
        assert_eq!(normalize_image_identification("Unknown Plant\n"), UNKNOWN_PLANT);
    }
}
