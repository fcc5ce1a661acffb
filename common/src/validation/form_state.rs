use super::{validate, CustomerForm, FieldErrors, FormField, ValidationError};
use crate::model::customer::CustomerInput;
use std::collections::BTreeSet;

/// Validate-on-change form model.
///
/// Every mutation re-runs the full validation, so `is_valid` always reflects
/// all fields simultaneously and the UI can keep the submit button disabled
/// until it flips. Errors are only surfaced for fields the user has touched.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: CustomerForm,
    errors: FieldErrors,
    touched: BTreeSet<FormField>,
    is_valid: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(CustomerForm::default())
    }
}

impl FormState {
    pub fn new(values: CustomerForm) -> Self {
        let mut state = Self {
            values,
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            is_valid: false,
        };
        state.revalidate();
        state
    }

    pub fn values(&self) -> &CustomerForm {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stores a new value for `field` and recomputes validity.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.revalidate();
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Marks every field as touched, revealing all pending errors.
    pub fn touch_all(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    /// The error to display next to `field`, if any.
    pub fn visible_error(&self, field: FormField) -> Option<&ValidationError> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Runs validation once more and returns the typed input when valid.
    pub fn validated(&self) -> Result<CustomerInput, FieldErrors> {
        validate(&self.values)
    }

    fn revalidate(&mut self) {
        match validate(&self.values) {
            Ok(_) => {
                self.errors = FieldErrors::default();
                self.is_valid = true;
            }
            Err(errors) => {
                self.errors = errors;
                self.is_valid = false;
            }
        }
    }
}
