//! Coercion and validation of raw form input.
//!
//! The browser hands every field over as a string. [`validate`] coerces each
//! one, checks it against its constraint and either builds a
//! [`CustomerInput`] or reports every failing field at once, so the form can
//! show all inline messages together.
//!
//! A geography outside France, Germany and Spain is a validation failure here;
//! the encoder downstream never sees an unknown country.

mod form_state;

pub use form_state::FormState;

use crate::model::customer::{flag_from_code, CustomerInput, Gender, Geography};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const CREDIT_SCORE_MIN: u32 = 300;
pub const CREDIT_SCORE_MAX: u32 = 900;
pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 100;
pub const NAME_MIN_CHARS: usize = 2;

/// The eleven inputs of the prediction form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    CustomerName,
    Gender,
    Age,
    Geography,
    CreditScore,
    EstimatedSalary,
    Balance,
    HasCreditCard,
    Tenure,
    NumOfProducts,
    IsActiveMember,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::CustomerName,
        FormField::Gender,
        FormField::Age,
        FormField::Geography,
        FormField::CreditScore,
        FormField::EstimatedSalary,
        FormField::Balance,
        FormField::HasCreditCard,
        FormField::Tenure,
        FormField::NumOfProducts,
        FormField::IsActiveMember,
    ];

    /// Stable key, used as the HTML input id.
    pub fn key(self) -> &'static str {
        match self {
            FormField::CustomerName => "customerName",
            FormField::Gender => "gender",
            FormField::Age => "age",
            FormField::Geography => "geography",
            FormField::CreditScore => "creditScore",
            FormField::EstimatedSalary => "estimatedSalary",
            FormField::Balance => "balance",
            FormField::HasCreditCard => "hasCrCard",
            FormField::Tenure => "tenure",
            FormField::NumOfProducts => "numOfProducts",
            FormField::IsActiveMember => "isActiveMember",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::CustomerName => "Customer Name",
            FormField::Gender => "Gender",
            FormField::Age => "Age",
            FormField::Geography => "Geography",
            FormField::CreditScore => "Credit Score",
            FormField::EstimatedSalary => "Estimated Salary",
            FormField::Balance => "Balance",
            FormField::HasCreditCard => "Has Credit Card",
            FormField::Tenure => "Tenure (years)",
            FormField::NumOfProducts => "Number of Products",
            FormField::IsActiveMember => "Is Active Member",
        }
    }
}

/// Field-scoped failure. The `Display` text is what the form shows inline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Customer name is required")]
    NameRequired,
    #[error("Please enter a number")]
    NotANumber,
    #[error("Please enter a whole number")]
    NotAWholeNumber,
    #[error("Value is too large")]
    TooLarge,
    #[error("{subject} must be at least {min}")]
    BelowMinimum { subject: String, min: u32 },
    #[error("{subject} must be at most {max}")]
    AboveMaximum { subject: String, max: u32 },
    #[error("{subject} cannot be negative")]
    Negative { subject: String },
    #[error("Must have at least 1 product")]
    NoProducts,
    #[error("Please select a gender")]
    GenderRequired,
    #[error("Please select an option")]
    OptionRequired,
    #[error("Please select a country")]
    CountryRequired,
}

/// All failing fields of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<FormField, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn record<T>(&mut self, field: FormField, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.0.insert(field, err);
                None
            }
        }
    }
}

/// Raw, untyped form values exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub customer_name: String,
    pub credit_score: String,
    pub gender: String,
    pub age: String,
    pub tenure: String,
    pub balance: String,
    pub num_of_products: String,
    pub has_cr_card: String,
    pub is_active_member: String,
    pub estimated_salary: String,
    pub geography: String,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            credit_score: "650".to_string(),
            gender: "0".to_string(),
            age: "35".to_string(),
            tenure: "5".to_string(),
            balance: "0".to_string(),
            num_of_products: "1".to_string(),
            has_cr_card: "0".to_string(),
            is_active_member: "1".to_string(),
            estimated_salary: "50000".to_string(),
            geography: Geography::France.name().to_string(),
        }
    }
}

impl CustomerForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomerName => &self.customer_name,
            FormField::Gender => &self.gender,
            FormField::Age => &self.age,
            FormField::Geography => &self.geography,
            FormField::CreditScore => &self.credit_score,
            FormField::EstimatedSalary => &self.estimated_salary,
            FormField::Balance => &self.balance,
            FormField::HasCreditCard => &self.has_cr_card,
            FormField::Tenure => &self.tenure,
            FormField::NumOfProducts => &self.num_of_products,
            FormField::IsActiveMember => &self.is_active_member,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::CustomerName => &mut self.customer_name,
            FormField::Gender => &mut self.gender,
            FormField::Age => &mut self.age,
            FormField::Geography => &mut self.geography,
            FormField::CreditScore => &mut self.credit_score,
            FormField::EstimatedSalary => &mut self.estimated_salary,
            FormField::Balance => &mut self.balance,
            FormField::HasCreditCard => &mut self.has_cr_card,
            FormField::Tenure => &mut self.tenure,
            FormField::NumOfProducts => &mut self.num_of_products,
            FormField::IsActiveMember => &mut self.is_active_member,
        };
        *slot = value.into();
    }
}

/// Validates every field and builds a [`CustomerInput`] when all pass.
pub fn validate(form: &CustomerForm) -> Result<CustomerInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_name = errors.record(FormField::CustomerName, parse_name(&form.customer_name));
    let credit_score = errors.record(
        FormField::CreditScore,
        parse_bounded(&form.credit_score, "Score", CREDIT_SCORE_MIN, CREDIT_SCORE_MAX),
    );
    let gender = errors.record(FormField::Gender, parse_gender(&form.gender));
    let age = errors.record(FormField::Age, parse_bounded(&form.age, "Age", AGE_MIN, AGE_MAX));
    let tenure = errors.record(FormField::Tenure, parse_count(&form.tenure, "Tenure"));
    let balance = errors.record(FormField::Balance, parse_amount(&form.balance, "Balance"));
    let num_of_products = errors.record(
        FormField::NumOfProducts,
        parse_whole(&form.num_of_products).and_then(|n| {
            if n < 1.0 {
                Err(ValidationError::NoProducts)
            } else {
                to_u32(n)
            }
        }),
    );
    let has_credit_card = errors.record(FormField::HasCreditCard, parse_flag(&form.has_cr_card));
    let is_active_member =
        errors.record(FormField::IsActiveMember, parse_flag(&form.is_active_member));
    let estimated_salary = errors.record(
        FormField::EstimatedSalary,
        parse_amount(&form.estimated_salary, "Salary"),
    );
    let geography = errors.record(
        FormField::Geography,
        form.geography
            .parse::<Geography>()
            .map_err(|_| ValidationError::CountryRequired),
    );

    match (
        customer_name,
        credit_score,
        gender,
        age,
        tenure,
        balance,
        num_of_products,
        has_credit_card,
        is_active_member,
        estimated_salary,
        geography,
    ) {
        (
            Some(customer_name),
            Some(credit_score),
            Some(gender),
            Some(age),
            Some(tenure),
            Some(balance),
            Some(num_of_products),
            Some(has_credit_card),
            Some(is_active_member),
            Some(estimated_salary),
            Some(geography),
        ) if errors.is_empty() => Ok(CustomerInput {
            customer_name,
            credit_score,
            gender,
            age,
            tenure,
            balance,
            num_of_products,
            has_credit_card,
            is_active_member,
            estimated_salary,
            geography,
        }),
        _ => Err(errors),
    }
}

fn parse_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::NameRequired);
    }
    Ok(name.to_string())
}

fn parse_number(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber)
}

fn parse_whole(raw: &str) -> Result<f64, ValidationError> {
    let n = parse_number(raw)?;
    if n.fract() != 0.0 {
        return Err(ValidationError::NotAWholeNumber);
    }
    Ok(n)
}

fn to_u32(n: f64) -> Result<u32, ValidationError> {
    if n > f64::from(u32::MAX) {
        return Err(ValidationError::TooLarge);
    }
    Ok(n as u32)
}

fn parse_bounded(raw: &str, subject: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    let n = parse_whole(raw)?;
    if n < f64::from(min) {
        return Err(ValidationError::BelowMinimum {
            subject: subject.to_string(),
            min,
        });
    }
    if n > f64::from(max) {
        return Err(ValidationError::AboveMaximum {
            subject: subject.to_string(),
            max,
        });
    }
    Ok(n as u32)
}

fn parse_count(raw: &str, subject: &str) -> Result<u32, ValidationError> {
    let n = parse_whole(raw)?;
    if n < 0.0 {
        return Err(ValidationError::Negative {
            subject: subject.to_string(),
        });
    }
    to_u32(n)
}

fn parse_amount(raw: &str, subject: &str) -> Result<f64, ValidationError> {
    let n = parse_number(raw)?;
    if n < 0.0 {
        return Err(ValidationError::Negative {
            subject: subject.to_string(),
        });
    }
    Ok(n)
}

fn parse_code(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok()
}

fn parse_gender(raw: &str) -> Result<Gender, ValidationError> {
    parse_code(raw)
        .and_then(Gender::from_code)
        .ok_or(ValidationError::GenderRequired)
}

fn parse_flag(raw: &str) -> Result<bool, ValidationError> {
    parse_code(raw)
        .and_then(flag_from_code)
        .ok_or(ValidationError::OptionRequired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn jane_doe() -> CustomerForm {
        CustomerForm {
            customer_name: "Jane Doe".to_string(),
            ..CustomerForm::default()
        }
    }

    fn error_text(form: &CustomerForm, field: FormField) -> Option<String> {
        validate(form)
            .err()
            .and_then(|errors| errors.get(field).map(ToString::to_string))
    }

    #[test]
    fn defaults_only_miss_the_name() {
        let errors = validate(&CustomerForm::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::CustomerName).map(ToString::to_string),
            Some("Customer name is required".to_string())
        );
    }

    #[test]
    fn valid_form_builds_customer_input() {
        let input = validate(&jane_doe()).unwrap();
        assert_eq!(input.customer_name, "Jane Doe");
        assert_eq!(input.credit_score, 650);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.age, 35);
        assert_eq!(input.tenure, 5);
        assert_eq!(input.balance, 0.0);
        assert_eq!(input.num_of_products, 1);
        assert!(!input.has_credit_card);
        assert!(input.is_active_member);
        assert_eq!(input.estimated_salary, 50000.0);
        assert_eq!(input.geography, Geography::France);
    }

    #[test]
    fn single_character_name_is_rejected() {
        let mut form = jane_doe();
        form.customer_name = " J ".to_string();
        assert_eq!(
            error_text(&form, FormField::CustomerName).as_deref(),
            Some("Customer name is required")
        );
    }

    #[test]
    fn credit_score_bounds_have_distinct_messages() {
        let mut form = jane_doe();
        form.credit_score = "299".to_string();
        assert_eq!(
            error_text(&form, FormField::CreditScore).as_deref(),
            Some("Score must be at least 300")
        );
        form.credit_score = "901".to_string();
        assert_eq!(
            error_text(&form, FormField::CreditScore).as_deref(),
            Some("Score must be at most 900")
        );
        form.credit_score = "900".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn age_bounds() {
        let mut form = jane_doe();
        form.age = "17".to_string();
        assert_eq!(error_text(&form, FormField::Age).as_deref(), Some("Age must be at least 18"));
        form.age = "101".to_string();
        assert_eq!(error_text(&form, FormField::Age).as_deref(), Some("Age must be at most 100"));
    }

    #[test]
    fn negative_amounts_and_counts() {
        let mut form = jane_doe();
        form.tenure = "-1".to_string();
        form.balance = "-0.01".to_string();
        form.estimated_salary = "-5".to_string();
        form.num_of_products = "0".to_string();
        let errors = validate(&form).unwrap_err();
        let text = |f| errors.get(f).map(ToString::to_string);
        assert_eq!(text(FormField::Tenure).as_deref(), Some("Tenure cannot be negative"));
        assert_eq!(text(FormField::Balance).as_deref(), Some("Balance cannot be negative"));
        assert_eq!(text(FormField::EstimatedSalary).as_deref(), Some("Salary cannot be negative"));
        assert_eq!(text(FormField::NumOfProducts).as_deref(), Some("Must have at least 1 product"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn non_numeric_and_fractional_input() {
        let mut form = jane_doe();
        form.age = "thirty".to_string();
        form.credit_score = "650.5".to_string();
        form.balance = "1234.56".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(FormField::Age), Some(&ValidationError::NotANumber));
        assert_eq!(errors.get(FormField::CreditScore), Some(&ValidationError::NotAWholeNumber));
        assert_eq!(errors.get(FormField::Balance), None);
    }

    #[test]
    fn unknown_geography_is_a_validation_error() {
        let mut form = jane_doe();
        form.geography = "Italy".to_string();
        assert_eq!(
            error_text(&form, FormField::Geography).as_deref(),
            Some("Please select a country")
        );
    }

    #[test]
    fn category_fields_need_a_known_code() {
        let mut form = jane_doe();
        form.gender = String::new();
        form.has_cr_card = "2".to_string();
        form.is_active_member = "yes".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(FormField::Gender), Some(&ValidationError::GenderRequired));
        assert_eq!(errors.get(FormField::HasCreditCard), Some(&ValidationError::OptionRequired));
        assert_eq!(errors.get(FormField::IsActiveMember), Some(&ValidationError::OptionRequired));
    }

    #[test]
    fn form_field_accessors_are_consistent() {
        let mut form = CustomerForm::default();
        for (i, field) in FormField::ALL.into_iter().enumerate() {
            form.set(field, format!("value-{i}"));
        }
        for (i, field) in FormField::ALL.into_iter().enumerate() {
            assert_eq!(form.get(field), format!("value-{i}"));
        }
    }

    proptest! {
        #[test]
        fn out_of_range_credit_score_is_always_rejected(
            score in prop_oneof![-10_000i64..300, 901i64..10_000]
        ) {
            let mut form = jane_doe();
            form.credit_score = score.to_string();
            let errors = validate(&form).unwrap_err();
            prop_assert!(errors.get(FormField::CreditScore).is_some());
        }

        #[test]
        fn out_of_range_age_is_always_rejected(
            age in prop_oneof![-500i64..18, 101i64..1_000]
        ) {
            let mut form = jane_doe();
            form.age = age.to_string();
            prop_assert!(validate(&form).is_err());
        }

        #[test]
        fn negative_tenure_products_or_salary_is_always_rejected(
            tenure in -1_000i64..0,
            products in -1_000i64..1,
            salary in -1.0e9f64..-0.001,
        ) {
            let mut form = jane_doe();
            form.tenure = tenure.to_string();
            form.num_of_products = products.to_string();
            form.estimated_salary = salary.to_string();
            let errors = validate(&form).unwrap_err();
            prop_assert_eq!(errors.len(), 3);
        }

        #[test]
        fn in_range_values_are_accepted(
            score in 300u32..=900,
            age in 18u32..=100,
            tenure in 0u32..60,
            products in 1u32..10,
        ) {
            let mut form = jane_doe();
            form.credit_score = score.to_string();
            form.age = age.to_string();
            form.tenure = tenure.to_string();
            form.num_of_products = products.to_string();
            let input = validate(&form).unwrap();
            prop_assert_eq!(input.credit_score, score);
            prop_assert_eq!(input.age, age);
        }
    }
}
