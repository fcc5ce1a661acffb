use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Customer gender as collected by the form and coded for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Numeric code expected by the inference service.
    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Gender::Female),
            1 => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// Country of residence. The set is closed: the model was trained on exactly
/// these three markets and expects one indicator column per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geography '{0}'")]
pub struct UnknownGeography(pub String);

impl Geography {
    pub const ALL: [Geography; 3] = [Geography::France, Geography::Germany, Geography::Spain];

    pub fn name(self) -> &'static str {
        match self {
            Geography::France => "France",
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
        }
    }

    /// One-hot expansion in `[France, Germany, Spain]` order.
    pub fn indicators(self) -> [u8; 3] {
        match self {
            Geography::France => [1, 0, 0],
            Geography::Germany => [0, 1, 0],
            Geography::Spain => [0, 0, 1],
        }
    }

    /// Inverse of [`Geography::indicators`]. Anything other than exactly one
    /// `1` among zeros yields `None`.
    pub fn from_indicators(indicators: [u8; 3]) -> Option<Self> {
        match indicators {
            [1, 0, 0] => Some(Geography::France),
            [0, 1, 0] => Some(Geography::Germany),
            [0, 0, 1] => Some(Geography::Spain),
            _ => None,
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geography {
    type Err = UnknownGeography;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Geography::ALL
            .into_iter()
            .find(|g| g.name() == trimmed)
            .ok_or_else(|| UnknownGeography(s.to_string()))
    }
}

/// Boolean answers ("Has Credit Card", "Is Active Member") travel as 0/1.
pub fn flag_code(flag: bool) -> u8 {
    u8::from(flag)
}

pub fn flag_from_code(code: u8) -> Option<bool> {
    match code {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

pub fn flag_label(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// A fully validated customer record.
///
/// Only [`crate::validation::validate`] produces this from user input, so every
/// instance that reaches the encoder already satisfies the range constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub customer_name: String,
    /// 300 to 900 inclusive.
    pub credit_score: u32,
    pub gender: Gender,
    /// 18 to 100 inclusive.
    pub age: u32,
    /// Years with the bank.
    pub tenure: u32,
    pub balance: f64,
    /// At least 1.
    pub num_of_products: u32,
    pub has_credit_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub geography: Geography,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geography_parses_exact_country_names() {
        assert_eq!("France".parse::<Geography>(), Ok(Geography::France));
        assert_eq!(" Germany ".parse::<Geography>(), Ok(Geography::Germany));
        assert_eq!("Spain".parse::<Geography>(), Ok(Geography::Spain));
        assert!("Italy".parse::<Geography>().is_err());
        assert!("".parse::<Geography>().is_err());
    }

    #[test]
    fn indicators_round_trip_for_every_country() {
        for geography in Geography::ALL {
            let indicators = geography.indicators();
            assert_eq!(indicators.iter().filter(|&&v| v == 1).count(), 1);
            assert_eq!(Geography::from_indicators(indicators), Some(geography));
        }
    }

    #[test]
    fn ambiguous_indicators_are_rejected() {
        assert_eq!(Geography::from_indicators([0, 0, 0]), None);
        assert_eq!(Geography::from_indicators([1, 1, 0]), None);
        assert_eq!(Geography::from_indicators([0, 2, 0]), None);
    }

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::Female.code(), 0);
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::from_code(1), Some(Gender::Male));
        assert_eq!(Gender::from_code(2), None);
    }
}
