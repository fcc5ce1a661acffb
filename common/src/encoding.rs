//! Feature encoder: validated customer input to the model's numeric vector,
//! and back to human-readable rows for display.

use crate::model::customer::{flag_label, CustomerInput};
use crate::model::feature_vector::FeatureVector;
use serde::{Deserialize, Serialize};

/// Encodes a validated customer. Total: every [`CustomerInput`] maps to
/// exactly one vector, and the geography expands to one set indicator.
pub fn encode(input: &CustomerInput) -> FeatureVector {
    FeatureVector {
        credit_score: input.credit_score,
        gender: input.gender,
        age: input.age,
        tenure: input.tenure,
        balance: input.balance,
        num_of_products: input.num_of_products,
        has_credit_card: input.has_credit_card,
        is_active_member: input.is_active_member,
        estimated_salary: input.estimated_salary,
        geography: input.geography,
    }
}

/// One attribute of the customer rendered for people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Reverses the numeric codes back to their category labels.
pub fn decode_details(v: &FeatureVector) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Credit Score", v.credit_score.to_string()),
        DetailRow::new("Gender", v.gender.label()),
        DetailRow::new("Age", v.age.to_string()),
        DetailRow::new("Tenure", v.tenure.to_string()),
        DetailRow::new("Balance", format!("{:.2}", v.balance)),
        DetailRow::new("Number of Products", v.num_of_products.to_string()),
        DetailRow::new("Has Credit Card", flag_label(v.has_credit_card)),
        DetailRow::new("Is Active Member", flag_label(v.is_active_member)),
        DetailRow::new("Estimated Salary", format!("{:.2}", v.estimated_salary)),
        DetailRow::new("Geography", v.geography.name()),
    ]
}
