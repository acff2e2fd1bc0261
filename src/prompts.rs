//! Prompt templates for the hosted generative-language calls
//! Versioned templates with builders that inject the user's parameters

use crate::garden::{plant_capacity, Purpose};

/// Prompt template version for tracking and rollback.
/// Bump MAJOR for structural changes, MINOR for wording that affects output
/// shape, PATCH for tweaks.
pub const PROMPT_TEMPLATE_VERSION: &str = "1.0.0";

/// Prompt for the identify-from-image path. The model must answer with a
/// bare plant name or the "Unknown Plant" sentinel, never prose.
pub const IDENTIFY_IMAGE_PROMPT: &str = r#"Identify the plant in this image. Return ONLY the common plant name, nothing else. Examples of valid responses: "Coleus", "Rose", "Aloe Vera", "Snake Plant". If you cannot identify it, respond with "Unknown Plant"."#;

/// Build the plant-info prompt. The requested JSON shape is the wire shape
/// of [`crate::model::PlantFact`]; the normalizer validates the answer
/// against it.
pub fn plant_info_prompt(plant_name: &str) -> String {
    format!(
        r#"Please provide detailed information about the plant "{plant_name}" in the following JSON format. Be accurate and specific:

{{
  "name": "Exact plant name",
  "scientificName": "Scientific name",
  "category": "Choose from: Flower-based, Ayurvedic/Medicinal, Air-purifying, Good-looking, Mix & Match",
  "wateringFrequency": "Specific watering schedule (e.g., Every 2 days, Daily, Once a week)",
  "waterAmount": "Amount in ml (e.g., 300 ml)",
  "sunlight": "Light requirements (e.g., Full sun, Indirect sunlight, Low light)",
  "soilType": "Soil type needed (e.g., Well-drained loamy soil, Sandy soil)",
  "season": "Best growing season",
  "fertilizer": "Fertilizer requirements and frequency",
  "careLevel": "Easy, Medium, or Hard",
  "precautions": "Important care precautions",
  "benefits": ["list", "of", "benefits"],
  "commonIssues": ["common", "problems", "and", "solutions"],
  "growthTime": "Time to maturity",
  "confidence": 95
}}

Only return the JSON object, no additional text. If the plant doesn't exist, return null."#
    )
}

/// Build the garden-plan prompt for a resolved area and purpose.
///
/// The plant count baked into the prompt is `floor(area / 1.5)`, the same
/// capacity rule the plan assembly uses.
pub fn garden_plan_prompt(area_sqft: f64, purpose: Purpose) -> String {
    let max_plants = plant_capacity(area_sqft);
    let purpose_label = purpose.label();

    format!(
        r#"You are a garden planning expert. A user wants to create a {purpose_label} garden in a {area_sqft} square feet area.
Based on the calculation that each plant needs approximately 1.5 square feet, this space can accommodate {max_plants} plants.

Please suggest exactly {max_plants} diverse plants that are perfect for a {purpose_label} garden. Make sure the plants are:
1. Appropriate for the "{purpose_label}" category
2. Diverse in species (no repetitions)
3. Compatible with each other
4. Include a mix of different heights, colors, and functions

Return your response in the following JSON format:
{{
  "recommendations": [
    {{
      "name": "Plant name",
      "scientificName": "Scientific name",
      "spacing": "Space requirement in sq ft",
      "careInstructions": "Brief care summary",
      "whyThisPlant": "Why this plant fits the {purpose_label} category"
    }}
  ],
  "layoutSuggestion": "Brief suggestion on how to arrange these {max_plants} plants in {area_sqft} sq ft",
  "maintenanceSchedule": "Monthly maintenance overview for this garden"
}}

Only return the JSON object, no additional text."#
    )
}
