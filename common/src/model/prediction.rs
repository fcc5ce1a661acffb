use crate::model::feature_vector::FeatureVector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Binary outcome returned by the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PredictionLabel {
    /// `0`: the customer is expected to stay.
    Retain,
    /// `1`: the customer is expected to leave.
    Churn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("prediction must be 0 or 1, got {0}")]
pub struct InvalidPredictionLabel(pub String);

impl PredictionLabel {
    pub fn is_churn(self) -> bool {
        matches!(self, PredictionLabel::Churn)
    }

    /// Reads the `data` field of an upstream response.
    ///
    /// The service answers with a bare `0`/`1`; floats (`1.0`) and single
    /// element arrays (`[1]`) are accepted as well since model servers
    /// commonly emit either.
    pub fn from_value(value: &Value) -> Result<Self, InvalidPredictionLabel> {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 0.0 => Ok(PredictionLabel::Retain),
                Some(v) if v == 1.0 => Ok(PredictionLabel::Churn),
                _ => Err(InvalidPredictionLabel(n.to_string())),
            },
            Value::Array(items) if items.len() == 1 => Self::from_value(&items[0]),
            other => Err(InvalidPredictionLabel(other.to_string())),
        }
    }
}

impl From<PredictionLabel> for u8 {
    fn from(label: PredictionLabel) -> Self {
        match label {
            PredictionLabel::Retain => 0,
            PredictionLabel::Churn => 1,
        }
    }
}

impl TryFrom<u8> for PredictionLabel {
    type Error = InvalidPredictionLabel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PredictionLabel::Retain),
            1 => Ok(PredictionLabel::Churn),
            other => Err(InvalidPredictionLabel(other.to_string())),
        }
    }
}

/// Outcome of one successful submission. Lives only as long as the result
/// dialog; it is also the payload of `POST /api/report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub customer_name: String,
    pub form_data: FeatureVector,
    pub prediction: PredictionLabel,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_accepts_integer_float_and_singleton_array() {
        assert_eq!(PredictionLabel::from_value(&json!(1)), Ok(PredictionLabel::Churn));
        assert_eq!(PredictionLabel::from_value(&json!(0.0)), Ok(PredictionLabel::Retain));
        assert_eq!(PredictionLabel::from_value(&json!([1])), Ok(PredictionLabel::Churn));
    }

    #[test]
    fn label_rejects_anything_else() {
        assert!(PredictionLabel::from_value(&json!(2)).is_err());
        assert!(PredictionLabel::from_value(&json!(0.5)).is_err());
        assert!(PredictionLabel::from_value(&json!("1")).is_err());
        assert!(PredictionLabel::from_value(&json!([0, 1])).is_err());
        assert!(PredictionLabel::from_value(&Value::Null).is_err());
    }

    #[test]
    fn label_serializes_as_integer() {
        assert_eq!(serde_json::to_value(PredictionLabel::Churn).unwrap(), json!(1));
        let label: PredictionLabel = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(label, PredictionLabel::Retain);
    }
}
