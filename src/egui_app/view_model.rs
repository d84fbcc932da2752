//! Helpers to convert service responses into egui-facing view structs.

use crate::api::{ConfusionMatrix, InferenceResult, Metrics, Recommendation, TrainingResult};
use crate::format;

/// Column of the recommendation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecommendationColumn {
    Brand,
    Processor,
    Ram,
    Price,
    SimilarityScore,
    PriceDifference,
    FinalScore,
    HasSacoche,
    IsAvailable,
}

impl RecommendationColumn {
    pub fn header(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Processor => "Processor",
            Self::Ram => "RAM",
            Self::Price => "Price (DT)",
            Self::SimilarityScore => "Similarity Score",
            Self::PriceDifference => "Price Difference",
            Self::FinalScore => "Final Score",
            Self::HasSacoche => "Has Sacoche",
            Self::IsAvailable => "Available",
        }
    }

    fn cell(self, row: &Recommendation) -> String {
        match self {
            Self::Brand => row.brand.clone(),
            Self::Processor => row.processor.clone(),
            Self::Ram => format::plain_number(row.ram),
            Self::Price => format::two_decimals(row.price),
            Self::SimilarityScore => optional(row.similarity_score, format::score_percent),
            Self::PriceDifference => optional(row.price_difference, format::two_decimals),
            Self::FinalScore => optional(row.final_score, format::two_decimals),
            Self::HasSacoche => optional_flag(row.has_sacoche),
            Self::IsAvailable => optional_flag(row.is_available),
        }
    }

    fn present_in(self, row: &Recommendation) -> bool {
        match self {
            Self::Brand | Self::Processor | Self::Ram | Self::Price => true,
            Self::SimilarityScore => row.similarity_score.is_some(),
            Self::PriceDifference => row.price_difference.is_some(),
            Self::FinalScore => row.final_score.is_some(),
            Self::HasSacoche => row.has_sacoche.is_some(),
            Self::IsAvailable => row.is_available.is_some(),
        }
    }
}

const COLUMN_ORDER: [RecommendationColumn; 9] = [
    RecommendationColumn::Brand,
    RecommendationColumn::Processor,
    RecommendationColumn::Ram,
    RecommendationColumn::Price,
    RecommendationColumn::SimilarityScore,
    RecommendationColumn::PriceDifference,
    RecommendationColumn::FinalScore,
    RecommendationColumn::HasSacoche,
    RecommendationColumn::IsAvailable,
];

fn optional(value: Option<f64>, render: fn(f64) -> String) -> String {
    value.map(render).unwrap_or_default()
}

fn optional_flag(value: Option<bool>) -> String {
    value.map(format::yes_no).unwrap_or_default().to_string()
}

/// Formatted recommendation table, rows in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    pub columns: Vec<RecommendationColumn>,
    /// One entry per recommendation, one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl RecommendationTable {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.header())
    }
}

/// Build the table; optional columns are kept only if some row carries them.
pub fn recommendation_table(items: &[Recommendation]) -> RecommendationTable {
    let columns: Vec<RecommendationColumn> = COLUMN_ORDER
        .into_iter()
        .filter(|column| items.iter().any(|row| column.present_in(row)))
        .collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|row| columns.iter().map(|column| column.cell(row)).collect())
        .collect();
    RecommendationTable { columns, rows }
}

/// Key/value rows for the metrics table, in server order.
pub fn metric_rows(metrics: Option<&Metrics>) -> Vec<(String, String)> {
    metrics
        .map(|metrics| {
            metrics
                .iter()
                .map(|(key, value)| (key.clone(), format::metric_value(value)))
                .collect()
        })
        .unwrap_or_default()
}

/// Column ticks of the confusion matrix heatmap.
pub const HEATMAP_X_LABELS: [&str; 2] = ["Predicted 0", "Predicted 1"];
/// Row ticks; row `i` of the matrix carries the `i`-th label.
pub const HEATMAP_Y_LABELS: [&str; 2] = ["Actual 1", "Actual 0"];

/// One annotated heatmap cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapCell {
    pub value: u64,
    /// Position on the colour scale, 0.0 to 1.0.
    pub intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapModel {
    pub x_labels: [&'static str; 2],
    pub y_labels: [&'static str; 2],
    pub cells: [[HeatmapCell; 2]; 2],
    /// Top of the colour scale.
    pub scale_max: u64,
}

pub fn heatmap(matrix: &ConfusionMatrix) -> HeatmapModel {
    let scale_max = matrix.max_cell();
    let cell = |value: u64| HeatmapCell {
        value,
        intensity: if scale_max == 0 {
            0.0
        } else {
            value as f32 / scale_max as f32
        },
    };
    let [[a, b], [c, d]] = matrix.0;
    HeatmapModel {
        x_labels: HEATMAP_X_LABELS,
        y_labels: HEATMAP_Y_LABELS,
        cells: [[cell(a), cell(b)], [cell(c), cell(d)]],
        scale_max,
    }
}

/// Headline text for a finished training run.
pub fn accuracy_line(result: &TrainingResult) -> String {
    format!("Accuracy: {}", format::accuracy_percent(result.accuracy))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutSeverity {
    Positive,
    Cautionary,
}

/// Inline prediction callout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceCallout {
    pub severity: CalloutSeverity,
    pub title: String,
    pub detail: String,
}

pub fn inference_callout(result: &InferenceResult) -> InferenceCallout {
    let severity = if result.is_in_stock() {
        CalloutSeverity::Positive
    } else {
        CalloutSeverity::Cautionary
    };
    InferenceCallout {
        severity,
        title: format!("Prediction: {}", result.prediction),
        detail: format!(
            "{} at {} DT",
            result.product_name,
            format::two_decimals(result.price)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_row() -> Recommendation {
        Recommendation {
            brand: "ASUS".into(),
            processor: "I7".into(),
            ram: 16.0,
            price: 1234.5,
            similarity_score: Some(0.873),
            price_difference: Some(-12.5),
            final_score: Some(0.91),
            has_sacoche: Some(true),
            is_available: Some(false),
        }
    }

    fn slim_row(brand: &str) -> Recommendation {
        Recommendation {
            brand: brand.into(),
            processor: "I3".into(),
            ram: 8.0,
            price: 800.0,
            similarity_score: None,
            price_difference: None,
            final_score: None,
            has_sacoche: None,
            is_available: None,
        }
    }

    #[test]
    fn full_rows_format_every_column() {
        let table = recommendation_table(&[full_row()]);
        assert_eq!(table.columns.len(), 9);
        assert_eq!(
            table.rows[0],
            vec![
                "ASUS", "I7", "16", "1234.50", "87.3%", "-12.50", "0.91", "Yes", "No"
            ]
        );
    }

    #[test]
    fn slim_rows_hide_optional_columns() {
        let table = recommendation_table(&[slim_row("HP"), slim_row("DELL")]);
        assert_eq!(
            table.headers().collect::<Vec<_>>(),
            vec!["Brand", "Processor", "RAM", "Price (DT)"]
        );
        assert_eq!(table.rows[1][0], "DELL");
    }

    #[test]
    fn mixed_rows_leave_missing_cells_blank() {
        let table = recommendation_table(&[slim_row("HP"), full_row()]);
        assert_eq!(table.columns.len(), 9);
        assert_eq!(table.rows[0][4], "");
        assert_eq!(table.rows[1][4], "87.3%");
    }

    #[test]
    fn metric_rows_keep_server_order() {
        let mut metrics = Metrics::new();
        metrics.insert("recall".into(), json!(0.5));
        metrics.insert("algorithm".into(), json!("cosine"));
        metrics.insert("top_k".into(), json!([1, 2]));
        assert_eq!(
            metric_rows(Some(&metrics)),
            vec![
                ("recall".to_string(), "0.50".to_string()),
                ("algorithm".to_string(), "cosine".to_string()),
                ("top_k".to_string(), "[1,2]".to_string()),
            ]
        );
        assert!(metric_rows(None).is_empty());
    }

    #[test]
    fn heatmap_scales_to_max_cell() {
        let model = heatmap(&ConfusionMatrix([[5, 2], [1, 8]]));
        assert_eq!(model.scale_max, 8);
        assert_eq!(model.cells[1][1].intensity, 1.0);
        assert_eq!(model.cells[0][0].intensity, 5.0 / 8.0);
        assert_eq!(model.cells[1][0].value, 1);
        assert_eq!(model.y_labels, ["Actual 1", "Actual 0"]);
        assert_eq!(model.x_labels, ["Predicted 0", "Predicted 1"]);
    }

    #[test]
    fn empty_matrix_has_zero_intensity() {
        let model = heatmap(&ConfusionMatrix::default());
        assert_eq!(model.scale_max, 0);
        assert!(model.cells.iter().flatten().all(|cell| cell.intensity == 0.0));
    }

    #[test]
    fn callout_severity_follows_prediction() {
        let mut result = InferenceResult {
            product_name: "Vivobook".into(),
            price: 1500.0,
            prediction: "In stock".into(),
        };
        let callout = inference_callout(&result);
        assert_eq!(callout.severity, CalloutSeverity::Positive);
        assert_eq!(callout.detail, "Vivobook at 1500.00 DT");
        result.prediction = "Out of stock".into();
        assert_eq!(
            inference_callout(&result).severity,
            CalloutSeverity::Cautionary
        );
    }

    #[test]
    fn accuracy_line_uses_two_decimals() {
        let result = TrainingResult {
            message: String::new(),
            accuracy: 0.9,
            confusion_matrix: ConfusionMatrix::default(),
        };
        assert_eq!(accuracy_line(&result), "Accuracy: 90.00%");
    }
}
