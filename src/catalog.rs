//! Curated plant catalog and lookup
//! Fixed in-memory fact table, resolved by exact key then substring containment

use once_cell::sync::Lazy;

use crate::model::{Category, CareLevel, PlantFact};

/// The fixed, insertion-ordered fact table.
///
/// Keys are lower-cased, trimmed search aliases and need not equal the
/// record's display name. The table is built once and never mutated; the
/// declaration order below is the tie-break order for partial matches.
pub struct PlantCatalog {
    entries: Vec<(&'static str, PlantFact)>,
}

static CATALOG: Lazy<PlantCatalog> = Lazy::new(|| PlantCatalog { entries: curated_entries() });

impl PlantCatalog {
    /// The process-wide catalog instance.
    pub fn global() -> &'static PlantCatalog {
        &CATALOG
    }

    /// Resolve a free-text query to a catalog record.
    ///
    /// The query is lower-cased and trimmed, then matched exactly against the
    /// keys. Failing that, the first entry (in declaration order) wins where
    /// the query contains the key or the key, display name, or scientific
    /// name contains the query. A query that normalizes to the empty string
    /// never matches.
    pub fn resolve(&self, query: &str) -> Option<&PlantFact> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some((_, fact)) = self.entries.iter().find(|(key, _)| *key == normalized) {
            return Some(fact);
        }

        self.entries
            .iter()
            .find(|(key, fact)| {
                key.contains(&normalized)
                    || normalized.contains(key)
                    || fact.name.to_lowercase().contains(&normalized)
                    || fact.scientific_name.to_lowercase().contains(&normalized)
            })
            .map(|(_, fact)| fact)
    }

    /// All entries in declaration order, as (key, record) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &PlantFact)> {
        self.entries.iter().map(|(key, fact)| (*key, fact))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn curated_entries() -> Vec<(&'static str, PlantFact)> {
    vec![
        (
            "peace lily",
            PlantFact {
                name: "Peace Lily".to_string(),
                scientific_name: "Spathiphyllum wallisii".to_string(),
                category: Category::AirPurifying,
                watering_frequency: "Every 1-2 weeks, when the top inch of soil is dry".to_string(),
                water_amount: "250 ml".to_string(),
                sunlight: "Bright, indirect light. Avoid direct sunlight".to_string(),
                soil_type: "Well-draining potting mix with peat moss".to_string(),
                season: "Spring and Summer for growth, can bloom year-round indoors".to_string(),
                fertilizer: "Monthly during growing season with balanced liquid fertilizer".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Mildly toxic to pets if ingested; keep out of cold drafts".to_string(),
                benefits: vec![
                    "Air-purifying qualities".to_string(),
                    "Low maintenance".to_string(),
                    "Beautiful white flowers".to_string(),
                    "Removes toxins from air".to_string(),
                ],
                common_issues: Some(vec![
                    "Brown leaf tips (overwatering or low humidity)".to_string(),
                    "Yellow leaves (overwatering)".to_string(),
                    "No flowers (insufficient light)".to_string(),
                ]),
                growth_time: Some("Medium (3-6 months)".to_string()),
                confidence: 95,
            },
        ),
        (
            "snake plant",
            PlantFact {
                name: "Snake Plant".to_string(),
                scientific_name: "Sansevieria trifasciata".to_string(),
                category: Category::AirPurifying,
                watering_frequency: "Every 2-3 weeks, let soil dry completely between waterings".to_string(),
                water_amount: "200 ml".to_string(),
                sunlight: "Low to bright, indirect light. Very adaptable".to_string(),
                soil_type: "Well-draining succulent or cactus potting mix".to_string(),
                season: "Spring and Summer for active growth".to_string(),
                fertilizer: "Monthly during spring and summer with diluted fertilizer".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Do not overwater; tolerates neglect better than attention".to_string(),
                benefits: vec![
                    "Releases oxygen at night".to_string(),
                    "Extremely low maintenance".to_string(),
                    "Drought tolerant".to_string(),
                    "Air purifying".to_string(),
                ],
                common_issues: Some(vec![
                    "Root rot (overwatering)".to_string(),
                    "Mushy leaves (overwatering)".to_string(),
                    "Slow growth (normal characteristic)".to_string(),
                ]),
                growth_time: Some("Slow (6-12 months)".to_string()),
                confidence: 98,
            },
        ),
        (
            "pothos",
            PlantFact {
                name: "Golden Pothos".to_string(),
                scientific_name: "Epipremnum aureum".to_string(),
                category: Category::AirPurifying,
                watering_frequency: "Weekly, when the top 1-2 inches of soil feel dry".to_string(),
                water_amount: "300 ml".to_string(),
                sunlight: "Bright to medium, indirect light. Tolerates low light".to_string(),
                soil_type: "Regular potting soil with good drainage".to_string(),
                season: "Spring through Fall for active growth".to_string(),
                fertilizer: "Monthly during growing season with liquid fertilizer".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Toxic to cats and dogs; trim vines to keep shape".to_string(),
                benefits: vec![
                    "Fast growing".to_string(),
                    "Easy propagation".to_string(),
                    "Trailing vine".to_string(),
                    "Air purifying".to_string(),
                ],
                common_issues: Some(vec![
                    "Yellowing leaves (overwatering or natural aging)".to_string(),
                    "Brown spots (direct sunlight)".to_string(),
                    "Leggy growth (insufficient light)".to_string(),
                ]),
                growth_time: Some("Fast (2-3 months)".to_string()),
                confidence: 92,
            },
        ),
        (
            "monstera",
            PlantFact {
                name: "Monstera Deliciosa".to_string(),
                scientific_name: "Monstera deliciosa".to_string(),
                category: Category::GoodLooking,
                watering_frequency: "Weekly, when the top 1-2 inches of soil are dry".to_string(),
                water_amount: "400 ml".to_string(),
                sunlight: "Bright, indirect light. Avoid direct sunlight".to_string(),
                soil_type: "Well-draining potting mix with peat moss and perlite".to_string(),
                season: "Spring and Summer for rapid growth".to_string(),
                fertilizer: "Monthly feeding during growing season with balanced fertilizer".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Prefers humid conditions; wipe the large leaves to keep pores clear".to_string(),
                benefits: vec![
                    "Large decorative leaves".to_string(),
                    "Air purifying".to_string(),
                    "Statement plant".to_string(),
                    "Can grow very large".to_string(),
                ],
                common_issues: Some(vec![
                    "Yellow leaves (overwatering or natural aging)".to_string(),
                    "No fenestrations (insufficient light or young plant)".to_string(),
                    "Brown leaf tips (low humidity or water quality)".to_string(),
                ]),
                growth_time: Some("Medium to Fast (3-4 months)".to_string()),
                confidence: 90,
            },
        ),
        (
            "aloe vera",
            PlantFact {
                name: "Aloe Vera".to_string(),
                scientific_name: "Aloe barbadensis miller".to_string(),
                category: Category::AyurvedicMedicinal,
                watering_frequency: "Every 2-3 weeks in summer, less in winter".to_string(),
                water_amount: "150 ml, deeply but infrequently".to_string(),
                sunlight: "Bright, indirect sunlight. Tolerates some direct morning sun".to_string(),
                soil_type: "Well-draining succulent or cactus potting mix".to_string(),
                season: "Spring and Summer for growth".to_string(),
                fertilizer: "2-3 times per year with succulent fertilizer".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Protect from frost; latex under the rind can irritate skin".to_string(),
                benefits: vec![
                    "Medicinal properties".to_string(),
                    "Gel for burns and cuts".to_string(),
                    "Low maintenance".to_string(),
                    "Drought tolerant".to_string(),
                ],
                common_issues: Some(vec![
                    "Soft, mushy leaves (overwatering)".to_string(),
                    "Brown/red leaves (too much direct sun)".to_string(),
                    "Stretching (insufficient light)".to_string(),
                ]),
                growth_time: Some("Slow to Medium (4-6 months)".to_string()),
                confidence: 96,
            },
        ),
        (
            "rubber plant",
            PlantFact {
                name: "Rubber Plant".to_string(),
                scientific_name: "Ficus elastica".to_string(),
                category: Category::GoodLooking,
                watering_frequency: "Every 1-2 weeks, when the top inch of soil is dry".to_string(),
                water_amount: "350 ml".to_string(),
                sunlight: "Bright, indirect light. Tolerates some direct morning sun".to_string(),
                soil_type: "Well-draining potting mix with good aeration".to_string(),
                season: "Spring and Summer for active growth".to_string(),
                fertilizer: "Monthly during growing season with balanced liquid fertilizer".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Milky sap irritates skin; keep temperatures consistent".to_string(),
                benefits: vec![
                    "Air purifying".to_string(),
                    "Large glossy leaves".to_string(),
                    "Can grow into tree".to_string(),
                    "Statement plant".to_string(),
                ],
                common_issues: Some(vec![
                    "Leaf drop (watering or environmental stress)".to_string(),
                    "Brown leaf edges (low humidity or fluoride in water)".to_string(),
                    "Sticky leaves (natural secretion when stressed)".to_string(),
                ]),
                growth_time: Some("Medium (4-6 months)".to_string()),
                confidence: 88,
            },
        ),
        (
            "spider plant",
            PlantFact {
                name: "Spider Plant".to_string(),
                scientific_name: "Chlorophytum comosum".to_string(),
                category: Category::AirPurifying,
                watering_frequency: "Weekly in summer, every 10 days in winter".to_string(),
                water_amount: "250 ml".to_string(),
                sunlight: "Bright, indirect light. Scorches in direct sun".to_string(),
                soil_type: "General-purpose potting mix with good drainage".to_string(),
                season: "Spring and Summer".to_string(),
                fertilizer: "Twice a month in growing season, diluted to half strength".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Sensitive to fluoride in tap water; use distilled if tips brown".to_string(),
                benefits: vec![
                    "Air purifying".to_string(),
                    "Pet friendly".to_string(),
                    "Produces plantlets for easy propagation".to_string(),
                ],
                common_issues: Some(vec![
                    "Brown tips (fluoride or dry air)".to_string(),
                    "Pale leaves (too much sun)".to_string(),
                ]),
                growth_time: Some("Fast (2-3 months)".to_string()),
                confidence: 93,
            },
        ),
        (
            "areca palm",
            PlantFact {
                name: "Areca Palm".to_string(),
                scientific_name: "Dypsis lutescens".to_string(),
                category: Category::AirPurifying,
                watering_frequency: "Every 3-4 days in summer, weekly in winter".to_string(),
                water_amount: "500 ml".to_string(),
                sunlight: "Bright, filtered light".to_string(),
                soil_type: "Peat-based mix with coarse sand for drainage".to_string(),
                season: "Spring and Summer".to_string(),
                fertilizer: "Monthly in growing season with palm fertilizer".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Avoid soggy soil; browning fronds are often salt buildup".to_string(),
                benefits: vec![
                    "Natural humidifier".to_string(),
                    "Air purifying".to_string(),
                    "Soft tropical look".to_string(),
                ],
                common_issues: Some(vec![
                    "Yellowing fronds (overwatering)".to_string(),
                    "Brown frond tips (dry air or salts)".to_string(),
                ]),
                growth_time: Some("Slow (6-10 months)".to_string()),
                confidence: 87,
            },
        ),
        (
            "rose",
            PlantFact {
                name: "Rose".to_string(),
                scientific_name: "Rosa chinensis".to_string(),
                category: Category::FlowerBased,
                watering_frequency: "Every 2 days in summer, twice a week otherwise".to_string(),
                water_amount: "300 ml".to_string(),
                sunlight: "Full sun, at least 6 hours a day".to_string(),
                soil_type: "Well-drained loamy soil rich in organic matter".to_string(),
                season: "Spring to early Summer for the main flush".to_string(),
                fertilizer: "Every 3-4 weeks with rose feed during bloom".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Prune after flowering; watch for aphids and black spot".to_string(),
                benefits: vec![
                    "Fragrant flowers".to_string(),
                    "Long blooming season".to_string(),
                    "Attracts pollinators".to_string(),
                ],
                common_issues: Some(vec![
                    "Black spot (wet foliage)".to_string(),
                    "Aphid infestations".to_string(),
                    "Few blooms (insufficient sun)".to_string(),
                ]),
                growth_time: Some("Medium (3-5 months)".to_string()),
                confidence: 94,
            },
        ),
        (
            "hibiscus",
            PlantFact {
                name: "Hibiscus".to_string(),
                scientific_name: "Hibiscus rosa-sinensis".to_string(),
                category: Category::FlowerBased,
                watering_frequency: "Daily in hot weather, every 2-3 days otherwise".to_string(),
                water_amount: "400 ml".to_string(),
                sunlight: "Full sun to light shade".to_string(),
                soil_type: "Slightly acidic, well-drained soil".to_string(),
                season: "Summer through early Autumn".to_string(),
                fertilizer: "Every 2 weeks with high-potassium feed while flowering".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Buds drop if the plant dries out or is moved often".to_string(),
                benefits: vec![
                    "Large showy flowers".to_string(),
                    "Flowers used for herbal tea".to_string(),
                    "Attracts butterflies".to_string(),
                ],
                common_issues: Some(vec![
                    "Bud drop (irregular watering)".to_string(),
                    "Yellow leaves (cold drafts)".to_string(),
                ]),
                growth_time: Some("Medium (3-4 months)".to_string()),
                confidence: 91,
            },
        ),
        (
            "marigold",
            PlantFact {
                name: "Marigold".to_string(),
                scientific_name: "Tagetes erecta".to_string(),
                category: Category::FlowerBased,
                watering_frequency: "Every 2-3 days; allow surface to dry between waterings".to_string(),
                water_amount: "200 ml".to_string(),
                sunlight: "Full sun".to_string(),
                soil_type: "Moderately fertile, well-drained soil".to_string(),
                season: "Summer and Autumn; year-round in mild climates".to_string(),
                fertilizer: "Light monthly feeding; too much nitrogen reduces blooms".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Deadhead spent flowers to prolong blooming".to_string(),
                benefits: vec![
                    "Deters garden pests".to_string(),
                    "Continuous cheerful blooms".to_string(),
                    "Good companion plant for vegetables".to_string(),
                ],
                common_issues: Some(vec![
                    "Powdery mildew (poor air circulation)".to_string(),
                    "Spider mites in hot dry spells".to_string(),
                ]),
                growth_time: Some("Fast (45-60 days)".to_string()),
                confidence: 95,
            },
        ),
        (
            "tulsi",
            PlantFact {
                name: "Holy Basil (Tulsi)".to_string(),
                scientific_name: "Ocimum tenuiflorum".to_string(),
                category: Category::AyurvedicMedicinal,
                watering_frequency: "Every 1-2 days; keep soil lightly moist".to_string(),
                water_amount: "150 ml".to_string(),
                sunlight: "Full sun to partial shade, 4-6 hours".to_string(),
                soil_type: "Loamy, fertile soil with good drainage".to_string(),
                season: "Spring through Autumn".to_string(),
                fertilizer: "Compost or diluted organic feed monthly".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Pinch flower spikes to keep leaf production up".to_string(),
                benefits: vec![
                    "Leaves used in Ayurvedic preparations".to_string(),
                    "Aromatic foliage".to_string(),
                    "Repels mosquitoes".to_string(),
                ],
                common_issues: Some(vec![
                    "Leaf curl (aphids or whitefly)".to_string(),
                    "Wilting (underwatering in hot sun)".to_string(),
                ]),
                growth_time: Some("Fast (60-90 days)".to_string()),
                confidence: 97,
            },
        ),
        (
            "neem",
            PlantFact {
                name: "Neem".to_string(),
                scientific_name: "Azadirachta indica".to_string(),
                category: Category::AyurvedicMedicinal,
                watering_frequency: "Weekly for young plants; established trees need little".to_string(),
                water_amount: "1 litre for saplings".to_string(),
                sunlight: "Full sun".to_string(),
                soil_type: "Tolerates poor soil; best in deep, well-drained beds".to_string(),
                season: "Grows year-round in warm climates".to_string(),
                fertilizer: "Rarely needed; compost once a season is plenty".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Not frost hardy; pot culture keeps size manageable".to_string(),
                benefits: vec![
                    "Leaves and oil used medicinally".to_string(),
                    "Natural insecticide source".to_string(),
                    "Dense shade tree".to_string(),
                ],
                common_issues: None,
                growth_time: Some("Slow (1-2 years to establish)".to_string()),
                confidence: 89,
            },
        ),
        (
            "lavender",
            PlantFact {
                name: "Lavender".to_string(),
                scientific_name: "Lavandula angustifolia".to_string(),
                category: Category::MixAndMatch,
                watering_frequency: "Every 1-2 weeks once established; drought tolerant".to_string(),
                water_amount: "250 ml".to_string(),
                sunlight: "Full sun".to_string(),
                soil_type: "Sandy, alkaline, sharply drained soil".to_string(),
                season: "Summer for flowering".to_string(),
                fertilizer: "Minimal; rich soil reduces fragrance".to_string(),
                care_level: CareLevel::Medium,
                precautions: "Wet roots are fatal; never mulch with moisture-holding material".to_string(),
                benefits: vec![
                    "Calming fragrance".to_string(),
                    "Attracts bees".to_string(),
                    "Flowers dry well for sachets".to_string(),
                ],
                common_issues: Some(vec![
                    "Root rot (heavy soil)".to_string(),
                    "Woody legginess (no annual prune)".to_string(),
                ]),
                growth_time: Some("Medium (4-6 months)".to_string()),
                confidence: 90,
            },
        ),
        (
            "jade plant",
            PlantFact {
                name: "Jade Plant".to_string(),
                scientific_name: "Crassula ovata".to_string(),
                category: Category::GoodLooking,
                watering_frequency: "Every 2-3 weeks; soil must dry out fully".to_string(),
                water_amount: "100 ml".to_string(),
                sunlight: "Bright light with some direct sun".to_string(),
                soil_type: "Gritty succulent mix".to_string(),
                season: "Spring and Summer".to_string(),
                fertilizer: "Succulent feed 3-4 times a year".to_string(),
                care_level: CareLevel::Easy,
                precautions: "Toxic to pets; leaves shrivel when thirsty, not dying".to_string(),
                benefits: vec![
                    "Lives for decades".to_string(),
                    "Sculptural bonsai-like form".to_string(),
                    "Very forgiving of neglect".to_string(),
                ],
                common_issues: Some(vec![
                    "Dropping leaves (overwatering)".to_string(),
                    "Stretched growth (low light)".to_string(),
                ]),
                growth_time: None,
                confidence: 92,
            },
        ),
        (
            "zz plant",
            PlantFact {
                name: "ZZ Plant".to_string(),
                scientific_name: "Zamioculcas zamiifolia".to_string(),
                category: Category::GoodLooking,
                watering_frequency: "Every 2-4 weeks; rhizomes store water".to_string(),
                water_amount: "200 ml".to_string(),
                sunlight: "Low to bright indirect light".to_string(),
                soil_type: "Well-draining potting mix".to_string(),
                season: "Spring and Summer".to_string(),
                fertilizer: "Twice a year is sufficient".to_string(),
                care_level: CareLevel::Easy,
                precautions: "All parts toxic if ingested; wash hands after pruning".to_string(),
                benefits: vec![
                    "Thrives in offices and dim corners".to_string(),
                    "Glossy architectural foliage".to_string(),
                    "Nearly indestructible".to_string(),
                ],
                common_issues: Some(vec![
                    "Yellow stems (overwatering)".to_string(),
                ]),
                growth_time: Some("Slow (6-12 months)".to_string()),
                confidence: 94,
            },
        ),
    ]
}
