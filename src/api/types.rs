//! Request and response bodies exchanged with the service.
//!
//! Field names follow the service's wire format (`Brand`, `Has_Sacoche`, ...);
//! Rust-side names are snake_case.

use serde::{Deserialize, Serialize, Serializer};

use super::flag;

/// Prediction label the service uses for available products.
pub const IN_STOCK_LABEL: &str = "In stock";

/// A scoring criterion the service weights when ranking candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Brand,
    Processor,
    Ram,
    HasSacoche,
    IsAvailable,
}

impl Criterion {
    /// Every criterion in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Brand,
        Criterion::Processor,
        Criterion::Ram,
        Criterion::HasSacoche,
        Criterion::IsAvailable,
    ];

    /// Key used on the wire and as the form label.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Processor => "Processor",
            Self::Ram => "RAM",
            Self::HasSacoche => "Has_Sacoche",
            Self::IsAvailable => "Is_Available",
        }
    }
}

/// Per-criterion multipliers submitted to `/update-weights`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WeightConfig {
    #[serde(rename = "Brand")]
    pub brand: f64,
    #[serde(rename = "Processor")]
    pub processor: f64,
    #[serde(rename = "RAM")]
    pub ram: f64,
    #[serde(rename = "Has_Sacoche")]
    pub has_sacoche: f64,
    #[serde(rename = "Is_Available")]
    pub is_available: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            brand: 1.0,
            processor: 2.0,
            ram: 4.0,
            has_sacoche: 0.8,
            is_available: 1.0,
        }
    }
}

impl WeightConfig {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Brand => self.brand,
            Criterion::Processor => self.processor,
            Criterion::Ram => self.ram,
            Criterion::HasSacoche => self.has_sacoche,
            Criterion::IsAvailable => self.is_available,
        }
    }

    /// Copy with a single criterion replaced.
    pub fn with(mut self, criterion: Criterion, value: f64) -> Self {
        let slot = match criterion {
            Criterion::Brand => &mut self.brand,
            Criterion::Processor => &mut self.processor,
            Criterion::Ram => &mut self.ram,
            Criterion::HasSacoche => &mut self.has_sacoche,
            Criterion::IsAvailable => &mut self.is_available,
        };
        *slot = value;
        self
    }
}

/// Laptop brands offered by the requirements form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brand {
    Asus,
    Lenovo,
    Hp,
    Dell,
    Acer,
}

impl Brand {
    pub const ALL: [Brand; 5] = [Self::Asus, Self::Lenovo, Self::Hp, Self::Dell, Self::Acer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asus => "ASUS",
            Self::Lenovo => "LENOVO",
            Self::Hp => "HP",
            Self::Dell => "DELL",
            Self::Acer => "ACER",
        }
    }
}

/// Processor families offered by the requirements form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Processor {
    CeleronN4500,
    I3,
    I5,
    I7,
    AmdRyzen,
}

impl Processor {
    pub const ALL: [Processor; 5] = [
        Self::CeleronN4500,
        Self::I3,
        Self::I5,
        Self::I7,
        Self::AmdRyzen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CeleronN4500 => "Celeron N4500",
            Self::I3 => "I3",
            Self::I5 => "I5",
            Self::I7 => "I7",
            Self::AmdRyzen => "AMD Ryzen",
        }
    }
}

/// Purchase requirements submitted to `/get-recommendations`.
///
/// Unset brand/processor serialize as `""`; yes/no fields as `1`/`0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Requirements {
    #[serde(rename = "Brand", serialize_with = "serialize_brand")]
    pub brand: Option<Brand>,
    #[serde(rename = "Processor", serialize_with = "serialize_processor")]
    pub processor: Option<Processor>,
    #[serde(rename = "RAM")]
    pub ram: u32,
    #[serde(rename = "Has_Sacoche", serialize_with = "flag::serialize")]
    pub has_sacoche: bool,
    #[serde(rename = "Is_Available", serialize_with = "flag::serialize")]
    pub is_available: bool,
}

impl Requirements {
    pub const MIN_RAM: u32 = 2;
    pub const MAX_RAM: u32 = 64;

    /// Both mandatory selections are present.
    pub fn is_complete(&self) -> bool {
        self.brand.is_some() && self.processor.is_some()
    }
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            brand: None,
            processor: None,
            ram: 4,
            has_sacoche: true,
            is_available: true,
        }
    }
}

fn serialize_brand<S: Serializer>(value: &Option<Brand>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map_or("", Brand::as_str))
}

fn serialize_processor<S: Serializer>(
    value: &Option<Processor>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map_or("", Processor::as_str))
}

/// One ranked candidate returned by the service.
///
/// Score columns and yes/no columns are absent in the slimmer response shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Processor")]
    pub processor: String,
    #[serde(rename = "RAM")]
    pub ram: f64,
    #[serde(rename = "Price (DT)", alias = "Price")]
    pub price: f64,
    #[serde(rename = "Similarity_Score", default)]
    pub similarity_score: Option<f64>,
    #[serde(rename = "Price_Difference", default)]
    pub price_difference: Option<f64>,
    #[serde(rename = "Final_Score", default)]
    pub final_score: Option<f64>,
    #[serde(rename = "Has_Sacoche", default, deserialize_with = "flag::deserialize_opt")]
    pub has_sacoche: Option<bool>,
    #[serde(rename = "Is_Available", default, deserialize_with = "flag::deserialize_opt")]
    pub is_available: Option<bool>,
}

/// Free-form evaluation metrics, kept in server order.
pub type Metrics = serde_json::Map<String, serde_json::Value>;

/// Body of a successful `/get-recommendations` call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

/// 2×2 evaluation counts, rows and columns as sent by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ConfusionMatrix(pub [[u64; 2]; 2]);

impl ConfusionMatrix {
    /// Largest single cell; the heatmap scale tops out here.
    pub fn max_cell(&self) -> u64 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Body of a successful `/train-model` call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrainingResult {
    #[serde(default)]
    pub message: String,
    pub accuracy: f64,
    pub confusion_matrix: ConfusionMatrix,
}

/// Query parameters for `/inference`.
#[derive(Clone, Debug, PartialEq)]
pub struct InferenceRequest {
    pub product_name: String,
    pub price: f64,
}

/// Body of a successful `/inference` call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InferenceResult {
    pub product_name: String,
    pub price: f64,
    pub prediction: String,
}

impl InferenceResult {
    pub fn is_in_stock(&self) -> bool {
        self.prediction == IN_STOCK_LABEL
    }
}
