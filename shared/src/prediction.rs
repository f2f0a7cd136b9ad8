use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Classification outcome for one image category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryPrediction {
    pub class_prediction: String,
    pub confidence: f32,
}

/// Body of a successful prediction round trip, keyed by category part key.
/// Immutable once received; the form controller discards it on reset or when
/// the result display closes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PredictionResponse {
    pub predictions: HashMap<String, CategoryPrediction>,
}

/// Formats a confidence in `[0, 1]` as a percentage with two decimal digits.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_renders_with_two_decimals() {
        assert_eq!(format_confidence(0.8732), "87.32%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }

    #[test]
    fn parses_the_wire_shape() {
        let body = r#"{"predictions":{"mammograms":{"class_prediction":"Positive","confidence":0.87}}}"#;
        let parsed: PredictionResponse = serde_json::from_str(body).unwrap();

        let entry = &parsed.predictions["mammograms"];
        assert_eq!(entry.class_prediction, "Positive");
        assert!((entry.confidence - 0.87).abs() < f32::EPSILON);
    }

    #[test]
    fn round_trips_through_json() {
        let mut predictions = HashMap::new();
        predictions.insert(
            "ultrasounds".to_string(),
            CategoryPrediction {
                class_prediction: "Negative".to_string(),
                confidence: 0.42,
            },
        );
        let response = PredictionResponse { predictions };

        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: PredictionResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }
}
