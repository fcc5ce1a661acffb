use crate::model::customer::{flag_code, flag_from_code, Gender, Geography};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model-ready numeric encoding of a customer.
///
/// The geography is held as a [`Geography`] so the one-hot invariant (exactly
/// one indicator set) holds by construction. The three `Geography_*` columns
/// only exist on the wire, see [`WireFeatureVector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireFeatureVector", try_from = "WireFeatureVector")]
pub struct FeatureVector {
    pub credit_score: u32,
    pub gender: Gender,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_of_products: u32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub geography: Geography,
}

/// JSON layout shared by `/api/predict` and the upstream inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFeatureVector {
    #[serde(rename = "CreditScore")]
    pub credit_score: u32,
    #[serde(rename = "Gender")]
    pub gender: u8,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Tenure")]
    pub tenure: u32,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "NumOfProducts")]
    pub num_of_products: u32,
    #[serde(rename = "HasCrCard")]
    pub has_cr_card: u8,
    #[serde(rename = "IsActiveMember")]
    pub is_active_member: u8,
    #[serde(rename = "EstimatedSalary")]
    pub estimated_salary: f64,
    #[serde(rename = "Geography_France")]
    pub geography_france: u8,
    #[serde(rename = "Geography_Germany")]
    pub geography_germany: u8,
    #[serde(rename = "Geography_Spain")]
    pub geography_spain: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureVectorError {
    #[error("{field} must be 0 or 1, got {value}")]
    InvalidCode { field: &'static str, value: u8 },
    #[error(
        "exactly one geography indicator must be 1 \
         (France={france}, Germany={germany}, Spain={spain})"
    )]
    Geography { france: u8, germany: u8, spain: u8 },
}

impl From<FeatureVector> for WireFeatureVector {
    fn from(v: FeatureVector) -> Self {
        let [france, germany, spain] = v.geography.indicators();
        WireFeatureVector {
            credit_score: v.credit_score,
            gender: v.gender.code(),
            age: v.age,
            tenure: v.tenure,
            balance: v.balance,
            num_of_products: v.num_of_products,
            has_cr_card: flag_code(v.has_credit_card),
            is_active_member: flag_code(v.is_active_member),
            estimated_salary: v.estimated_salary,
            geography_france: france,
            geography_germany: germany,
            geography_spain: spain,
        }
    }
}

impl TryFrom<WireFeatureVector> for FeatureVector {
    type Error = FeatureVectorError;

    fn try_from(w: WireFeatureVector) -> Result<Self, Self::Error> {
        let gender = Gender::from_code(w.gender).ok_or(FeatureVectorError::InvalidCode {
            field: "Gender",
            value: w.gender,
        })?;
        let has_credit_card =
            flag_from_code(w.has_cr_card).ok_or(FeatureVectorError::InvalidCode {
                field: "HasCrCard",
                value: w.has_cr_card,
            })?;
        let is_active_member =
            flag_from_code(w.is_active_member).ok_or(FeatureVectorError::InvalidCode {
                field: "IsActiveMember",
                value: w.is_active_member,
            })?;
        let geography = Geography::from_indicators([
            w.geography_france,
            w.geography_germany,
            w.geography_spain,
        ])
        .ok_or(FeatureVectorError::Geography {
            france: w.geography_france,
            germany: w.geography_germany,
            spain: w.geography_spain,
        })?;

        Ok(FeatureVector {
            credit_score: w.credit_score,
            gender,
            age: w.age,
            tenure: w.tenure,
            balance: w.balance,
            num_of_products: w.num_of_products,
            has_credit_card,
            is_active_member,
            estimated_salary: w.estimated_salary,
            geography,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_json(france: u8, germany: u8, spain: u8) -> serde_json::Value {
        json!({
            "CreditScore": 700,
            "Gender": 1,
            "Age": 42,
            "Tenure": 3,
            "Balance": 1200.5,
            "NumOfProducts": 2,
            "HasCrCard": 1,
            "IsActiveMember": 0,
            "EstimatedSalary": 80000.0,
            "Geography_France": france,
            "Geography_Germany": germany,
            "Geography_Spain": spain,
        })
    }

    #[test]
    fn deserializes_wire_layout() {
        let v: FeatureVector = serde_json::from_value(wire_json(0, 1, 0)).unwrap();
        assert_eq!(v.geography, Geography::Germany);
        assert_eq!(v.gender, Gender::Male);
        assert!(v.has_credit_card);
        assert!(!v.is_active_member);
        assert_eq!(v.balance, 1200.5);
    }

    #[test]
    fn serializes_back_to_the_same_wire_object() {
        let v: FeatureVector = serde_json::from_value(wire_json(0, 0, 1)).unwrap();
        assert_eq!(serde_json::to_value(&v).unwrap(), wire_json(0, 0, 1));
    }

    #[test]
    fn rejects_two_geography_indicators() {
        let err = serde_json::from_value::<FeatureVector>(wire_json(1, 1, 0)).unwrap_err();
        assert!(err.to_string().contains("exactly one geography indicator"));
    }

    #[test]
    fn rejects_missing_geography_indicator() {
        assert!(serde_json::from_value::<FeatureVector>(wire_json(0, 0, 0)).is_err());
    }

    #[test]
    fn rejects_out_of_range_category_code() {
        let mut value = wire_json(1, 0, 0);
        value["HasCrCard"] = json!(3);
        let err = serde_json::from_value::<FeatureVector>(value).unwrap_err();
        assert!(err.to_string().contains("HasCrCard must be 0 or 1"));
    }
}
