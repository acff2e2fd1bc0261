use plantassist_lib::error::AppError;
use plantassist_lib::garden::{
    build_plan, GardenPlanResponse, GardenRecommendation, Purpose, SpaceSize,
};
use plantassist_lib::model::{Category, CareLevel, PlantFact};
use serde_json::json;

fn sample_fact() -> PlantFact {
    PlantFact {
        name: "Peace Lily".to_string(),
        scientific_name: "Spathiphyllum wallisii".to_string(),
        category: Category::AirPurifying,
        watering_frequency: "Every 1-2 weeks".to_string(),
        water_amount: "250 ml".to_string(),
        sunlight: "Bright, indirect light".to_string(),
        soil_type: "Well-draining potting mix".to_string(),
        season: "Spring and Summer".to_string(),
        fertilizer: "Monthly during growing season".to_string(),
        care_level: CareLevel::Medium,
        precautions: "Keep out of cold drafts".to_string(),
        benefits: vec!["Air-purifying qualities".to_string()],
        common_issues: Some(vec!["Brown leaf tips".to_string()]),
        growth_time: Some("Medium (3-6 months)".to_string()),
        confidence: 95,
    }
}

#[test]
fn plant_fact_json_contract() {
    let value = serde_json::to_value(sample_fact()).expect("serialize plant fact");
    let obj = value.as_object().expect("json object");

    for key in [
        "name",
        "scientificName",
        "category",
        "wateringFrequency",
        "waterAmount",
        "sunlight",
        "soilType",
        "season",
        "fertilizer",
        "careLevel",
        "precautions",
        "benefits",
        "commonIssues",
        "growthTime",
        "confidence",
    ] {
        assert!(obj.contains_key(key), "missing key: {key}");
    }

    assert_eq!(obj["category"], "Air-purifying");
    assert_eq!(obj["careLevel"], "Medium");
    assert_eq!(obj["confidence"], 95);
}

#[test]
fn plant_fact_round_trips_through_wire_shape() {
    let fact = sample_fact();
    let wire = serde_json::to_string(&fact).expect("serialize");
    let back: PlantFact = serde_json::from_str(&wire).expect("deserialize");
    assert_eq!(back, fact);
}

#[test]
fn garden_plan_json_contract() {
    let ai = GardenPlanResponse {
        recommendations: vec![GardenRecommendation {
            name: "Marigold".to_string(),
            scientific_name: "Tagetes erecta".to_string(),
            spacing: "1.5 sq ft".to_string(),
            care_instructions: "Full sun, water every 2-3 days".to_string(),
            why_this_plant: "Continuous blooms".to_string(),
        }],
        layout_suggestion: "Two staggered rows".to_string(),
        maintenance_schedule: "Deadhead weekly".to_string(),
    };
    let plan = build_plan(SpaceSize::Small, 16.0, Purpose::Flower, Some(ai));

    let value = serde_json::to_value(&plan).expect("serialize plan");
    let obj = value.as_object().expect("json object");
    for key in ["space", "plants", "arrangement", "maintenance"] {
        assert!(obj.contains_key(key), "missing key: {key}");
    }

    assert_eq!(value["space"]["size"], "Small Garden");
    assert_eq!(value["space"]["purpose"], "Flower-based Garden");
    assert_eq!(value["space"]["totalPlants"], 10);
    assert_eq!(value["plants"][0]["scientificName"], "Tagetes erecta");
    assert_eq!(value["plants"][0]["whyThisPlant"], "Continuous blooms");
    assert_eq!(value["arrangement"]["layout"], "Two staggered rows");
    assert_eq!(value["maintenance"]["overview"], "Deadhead weekly");
    assert_eq!(value["maintenance"]["weekly"].as_str().map(str::is_empty), Some(false));
}

#[test]
fn garden_plan_request_shapes_parse() {
    let size: SpaceSize = serde_json::from_value(json!("very-large")).expect("space size");
    assert_eq!(size, SpaceSize::VeryLarge);

    let purpose: Purpose = serde_json::from_value(json!("medicinal")).expect("purpose");
    assert_eq!(purpose, Purpose::Medicinal);

    assert!(serde_json::from_value::<Purpose>(json!("bonsai")).is_err());
}

#[test]
fn app_error_json_contract() {
    let err = AppError::plant_not_found("dragonfruit");
    let value = serde_json::to_value(&err).expect("serialize error");
    let obj = value.as_object().expect("json object");

    for key in ["code", "message", "retryable", "category"] {
        assert!(obj.contains_key(key), "missing key: {key}");
    }
    // detail is internal-only and stays off the wire when absent
    assert!(!obj.contains_key("detail"));
    assert_eq!(obj["code"], "NOT_FOUND_PLANT");
    assert_eq!(obj["category"], "not_found");
    assert_eq!(obj["retryable"], false);
}
