//! Canonical plant-care data model
//! One record shape shared by the curated catalog, the AI normalizer, and the API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garden purpose category a plant belongs to.
///
/// The generative model is asked to pick from the nominal set, but its output
/// is passed through verbatim: anything outside the set lands in `Other`
/// rather than being coerced or rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    FlowerBased,
    AyurvedicMedicinal,
    AirPurifying,
    GoodLooking,
    MixAndMatch,
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Self::FlowerBased => "Flower-based",
            Self::AyurvedicMedicinal => "Ayurvedic/Medicinal",
            Self::AirPurifying => "Air-purifying",
            Self::GoodLooking => "Good-looking",
            Self::MixAndMatch => "Mix & Match",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Flower-based" => Self::FlowerBased,
            "Ayurvedic/Medicinal" => Self::AyurvedicMedicinal,
            "Air-purifying" => Self::AirPurifying,
            "Good-looking" => Self::GoodLooking,
            "Mix & Match" => Self::MixAndMatch,
            _ => Self::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How demanding a plant is to keep alive. Same pass-through rule as
/// [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CareLevel {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl CareLevel {
    pub fn label(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for CareLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Other(s),
        }
    }
}

impl From<CareLevel> for String {
    fn from(c: CareLevel) -> Self {
        c.label().to_string()
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The canonical care-information record for one plant.
///
/// Wire shape is camelCase, matching what the generative model is prompted to
/// return and what the browser client consumes. `common_issues` and
/// `growth_time` are optional; everything else is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantFact {
    pub name: String,
    pub scientific_name: String,
    pub category: Category,
    pub watering_frequency: String,
    pub water_amount: String,
    pub sunlight: String,
    pub soil_type: String,
    pub season: String,
    pub fertilizer: String,
    pub care_level: CareLevel,
    pub precautions: String,
    pub benefits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_issues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_time: Option<String>,
    pub confidence: u8,
}
