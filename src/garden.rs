//! Garden planning domain
//! Space sizing, purpose categories, and assembly of the final plan

use serde::{Deserialize, Serialize};

/// Ground area budgeted per plant, in square feet.
pub const PLANT_AREA_SQFT: f64 = 1.5;

/// Preset garden footprints offered by the UI, plus a custom escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceSize {
    Small,
    Medium,
    Large,
    VeryLarge,
    Custom,
}

impl SpaceSize {
    /// Area in square feet for the preset sizes; `Custom` carries its own.
    pub fn preset_area(&self) -> Option<f64> {
        match self {
            Self::Small => Some(16.0),
            Self::Medium => Some(36.0),
            Self::Large => Some(64.0),
            Self::VeryLarge => Some(100.0),
            Self::Custom => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small Garden",
            Self::Medium => "Medium Garden",
            Self::Large => "Large Garden",
            Self::VeryLarge => "Very Large Garden",
            Self::Custom => "Custom Size",
        }
    }
}

/// What the user wants the garden for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Flower,
    Aesthetic,
    Medicinal,
    Air,
    Mixed,
}

impl Purpose {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flower => "Flower-based Garden",
            Self::Aesthetic => "Good-looking Garden",
            Self::Medicinal => "Ayurvedic/Medicinal",
            Self::Air => "Air-purifying",
            Self::Mixed => "Mix & Match",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Flower => "Beautiful flowering plants",
            Self::Aesthetic => "Visually appealing foliage",
            Self::Medicinal => "Therapeutic and healing plants",
            Self::Air => "Clean air and healthy environment",
            Self::Mixed => "Combination of all benefits",
        }
    }
}

/// How many plants fit a given area at [`PLANT_AREA_SQFT`] per plant.
pub fn plant_capacity(area_sqft: f64) -> usize {
    (area_sqft / PLANT_AREA_SQFT).floor() as usize
}

/// One plant suggestion inside a garden-plan response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenRecommendation {
    pub name: String,
    pub scientific_name: String,
    pub spacing: String,
    pub care_instructions: String,
    pub why_this_plant: String,
}

/// The structured shape the garden-plan prompt asks the model to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlanResponse {
    pub recommendations: Vec<GardenRecommendation>,
    pub layout_suggestion: String,
    pub maintenance_schedule: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceSummary {
    pub size: &'static str,
    pub purpose: &'static str,
    pub area_sqft: f64,
    pub total_plants: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub layout: String,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub weekly: &'static str,
    pub monthly: &'static str,
    pub seasonal: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

/// The complete plan returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenPlan {
    pub space: SpaceSummary,
    pub plants: Vec<GardenRecommendation>,
    pub arrangement: Arrangement,
    pub maintenance: MaintenanceSchedule,
}

const PLACEMENT_TIPS: [&str; 5] = [
    "Place taller plants in the back or corners",
    "Group plants with similar water needs together",
    "Leave adequate space for growth and maintenance",
    "Consider light requirements when positioning plants",
    "Space plants approximately 1.5 sq.ft apart for optimal growth",
];

const WEEKLY_MAINTENANCE: &str = "Check soil moisture, rotate plants for even light exposure";
const MONTHLY_MAINTENANCE: &str =
    "Fertilize during growing season, inspect for pests and diseases";
const SEASONAL_MAINTENANCE: &str =
    "Repot when root-bound, adjust watering based on season";

/// Assemble the plan from the resolved area and the model's suggestions.
///
/// `ai` is `None` when no model is configured or the call failed; the plan
/// then ships with an empty plant list and the fixed layout/maintenance
/// guidance so the client still has something to render.
pub fn build_plan(
    size: SpaceSize,
    area_sqft: f64,
    purpose: Purpose,
    ai: Option<GardenPlanResponse>,
) -> GardenPlan {
    let total_plants = plant_capacity(area_sqft);
    let (plants, ai_layout, ai_maintenance) = match ai {
        Some(resp) => (
            resp.recommendations,
            Some(resp.layout_suggestion),
            Some(resp.maintenance_schedule),
        ),
        None => (Vec::new(), None, None),
    };

    let layout = ai_layout.unwrap_or_else(|| {
        format!(
            "Optimized {area_sqft} sq.ft arrangement for {total_plants} plants focused on {}",
            purpose.description().to_lowercase()
        )
    });

    GardenPlan {
        space: SpaceSummary {
            size: size.label(),
            purpose: purpose.label(),
            area_sqft,
            total_plants,
        },
        plants,
        arrangement: Arrangement { layout, tips: PLACEMENT_TIPS.to_vec() },
        maintenance: MaintenanceSchedule {
            weekly: WEEKLY_MAINTENANCE,
            monthly: MONTHLY_MAINTENANCE,
            seasonal: SEASONAL_MAINTENANCE,
            overview: ai_maintenance,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_capacity_floors() {
        assert_eq!(plant_capacity(16.0), 10);
        assert_eq!(plant_capacity(36.0), 24);
        assert_eq!(plant_capacity(100.0), 66);
        assert_eq!(plant_capacity(1.5), 1);
        assert_eq!(plant_capacity(1.4), 0);
    }

    #[test]
    fn test_space_size_wire_names_are_kebab_case() {
        assert_eq!(serde_json::to_string(&SpaceSize::VeryLarge).unwrap(), "\"very-large\"");
        let size: SpaceSize = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, SpaceSize::Small);
        assert_eq!(size.preset_area(), Some(16.0));
    }

    #[test]
    fn test_build_plan_without_model_uses_fallbacks() {
        let plan = build_plan(SpaceSize::Small, 16.0, Purpose::Air, None);
        assert!(plan.plants.is_empty());
        assert_eq!(plan.space.total_plants, 10);
        assert!(plan.arrangement.layout.contains("16 sq.ft"));
        assert!(plan.arrangement.layout.contains("clean air"));
        assert!(plan.maintenance.overview.is_none());
        assert_eq!(plan.arrangement.tips.len(), 5);
    }

    #[test]
    fn test_build_plan_prefers_model_layout() {
        let ai = GardenPlanResponse {
            recommendations: vec![GardenRecommendation {
                name: "Marigold".to_string(),
                scientific_name: "Tagetes erecta".to_string(),
                spacing: "1.5 sq ft".to_string(),
                care_instructions: "Full sun".to_string(),
                why_this_plant: "Reliable blooms".to_string(),
            }],
            layout_suggestion: "Two staggered rows".to_string(),
            maintenance_schedule: "Deadhead weekly".to_string(),
        };
        let plan = build_plan(SpaceSize::Custom, 12.0, Purpose::Flower, Some(ai));
        assert_eq!(plan.plants.len(), 1);
        assert_eq!(plan.arrangement.layout, "Two staggered rows");
        assert_eq!(plan.maintenance.overview.as_deref(), Some("Deadhead weekly"));
        assert_eq!(plan.space.total_plants, 8);
    }
}
