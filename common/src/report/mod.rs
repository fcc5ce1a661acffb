//! Visible content of the churn report.
//!
//! [`ReportContent`] is everything the PDF shows, already resolved to text and
//! colors. The PDF renderer only lays it out, so two reports built from the
//! same [`PredictionResult`] carry identical text.

use crate::encoding::{decode_details, DetailRow};
use crate::model::prediction::{PredictionLabel, PredictionResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const TITLE: &str = "CUSTOMER CHURN PREDICTION";
pub const SUBTITLE: &str = "CONFIDENTIAL REPORT";
pub const DETAILS_HEADING: &str = "Customer Details";
pub const RECOMMENDATIONS_HEADING: &str = "Recommendations";
pub const TABLE_HEADER: [&str; 2] = ["Attribute", "Value"];
pub const BRAND: &str = "CHURN PREDICTOR";
pub const DISCLAIMER: &str =
    "This prediction is based on statistical models and should be used as a guide only.";

const CHURN_RECOMMENDATIONS: [&str; 4] = [
    "Offer a personalized retention discount or promotion",
    "Schedule a customer service follow-up call",
    "Consider product upgrades or cross-selling opportunities",
    "Review pricing structure for this customer segment",
];

const RETAIN_RECOMMENDATIONS: [&str; 4] = [
    "Continue providing excellent service",
    "Consider loyalty rewards to maintain satisfaction",
    "Explore opportunities for product expansion",
    "Use as reference for successful customer relationships",
];

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const ACCENT_RED: Rgb = Rgb(220, 38, 38);
pub const BRAND_RED: Rgb = Rgb(239, 68, 68);
pub const MUTED_GREY: Rgb = Rgb(100, 100, 100);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Colored box stating the risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBanner {
    pub text: String,
    pub text_color: Rgb,
    pub fill_color: Rgb,
}

impl RiskBanner {
    pub fn for_label(label: PredictionLabel) -> Self {
        match label {
            PredictionLabel::Churn => RiskBanner {
                text: "HIGH RISK: Customer is likely to churn".to_string(),
                text_color: ACCENT_RED,
                fill_color: Rgb(254, 202, 202),
            },
            PredictionLabel::Retain => RiskBanner {
                text: "LOW RISK: Customer is unlikely to churn".to_string(),
                text_color: Rgb(22, 163, 74),
                fill_color: Rgb(187, 247, 208),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rank: usize,
    pub text: String,
}

pub fn recommendations(label: PredictionLabel) -> Vec<Recommendation> {
    let texts = match label {
        PredictionLabel::Churn => CHURN_RECOMMENDATIONS,
        PredictionLabel::Retain => RETAIN_RECOMMENDATIONS,
    };
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Recommendation {
            rank: i + 1,
            text: (*text).to_string(),
        })
        .collect()
}

/// Download name: whitespace runs become `_`.
pub fn report_filename(customer_name: &str) -> String {
    format!("{}_Churn_Report.pdf", WHITESPACE.replace_all(customer_name, "_"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub subtitle: String,
    pub customer_line: String,
    pub banner: RiskBanner,
    pub generated_line: String,
    pub details_heading: String,
    pub details: Vec<DetailRow>,
    pub recommendations_heading: String,
    pub recommendations: Vec<Recommendation>,
    pub brand: String,
    pub disclaimer: String,
    pub filename: String,
}

impl ReportContent {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            customer_line: format!("Customer: {}", result.customer_name),
            banner: RiskBanner::for_label(result.prediction),
            generated_line: format!(
                "Report generated: {}",
                result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            details_heading: DETAILS_HEADING.to_string(),
            details: decode_details(&result.form_data),
            recommendations_heading: RECOMMENDATIONS_HEADING.to_string(),
            recommendations: recommendations(result.prediction),
            brand: BRAND.to_string(),
            disclaimer: DISCLAIMER.to_string(),
            filename: report_filename(&result.customer_name),
        }
    }

    /// Every text fragment in reading order.
    pub fn visible_text(&self) -> Vec<String> {
        let mut lines = vec![
            self.title.clone(),
            self.subtitle.clone(),
            self.customer_line.clone(),
            self.banner.text.clone(),
            self.generated_line.clone(),
            self.details_heading.clone(),
            TABLE_HEADER.join(" | "),
        ];
        lines.extend(
            self.details
                .iter()
                .map(|row| format!("{} | {}", row.label, row.value)),
        );
        lines.push(self.recommendations_heading.clone());
        lines.extend(
            self.recommendations
                .iter()
                .map(|r| format!("{} | {}", r.rank, r.text)),
        );
        lines.push(self.disclaimer.clone());
        lines.push(self.brand.clone());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::customer::{Gender, Geography};
    use crate::model::feature_vector::FeatureVector;
    use chrono::{TimeZone, Utc};

    fn result(prediction: PredictionLabel) -> PredictionResult {
        PredictionResult {
            customer_name: "Jane  Q Doe".to_string(),
            form_data: FeatureVector {
                credit_score: 650,
                gender: Gender::Female,
                age: 35,
                tenure: 5,
                balance: 0.0,
                num_of_products: 1,
                has_credit_card: false,
                is_active_member: true,
                estimated_salary: 50000.0,
                geography: Geography::Germany,
            },
            prediction,
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn churn_report_has_high_risk_banner_and_retention_actions() {
        let report = ReportContent::from_result(&result(PredictionLabel::Churn));
        assert!(report.banner.text.contains("HIGH RISK"));
        assert_eq!(report.banner.text_color, ACCENT_RED);
        assert_eq!(
            report.recommendations[0].text,
            "Offer a personalized retention discount or promotion"
        );
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn retain_report_has_low_risk_banner() {
        let report = ReportContent::from_result(&result(PredictionLabel::Retain));
        assert!(report.banner.text.contains("LOW RISK"));
        assert_eq!(report.recommendations[0].text, "Continue providing excellent service");
        assert_eq!(
            report.recommendations.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn building_twice_yields_identical_text() {
        let input = result(PredictionLabel::Churn);
        let first = ReportContent::from_result(&input);
        let second = ReportContent::from_result(&input);
        assert_eq!(first.visible_text(), second.visible_text());
        assert_eq!(first, second);
    }

    #[test]
    fn header_lines_and_timestamp() {
        let report = ReportContent::from_result(&result(PredictionLabel::Retain));
        let text = report.visible_text();
        assert_eq!(text[0], "CUSTOMER CHURN PREDICTION");
        assert_eq!(text[1], "CONFIDENTIAL REPORT");
        assert_eq!(text[2], "Customer: Jane  Q Doe");
        assert_eq!(report.generated_line, "Report generated: 2026-03-14 09:26:53 UTC");
        assert!(text.contains(&"Geography | Germany".to_string()));
        assert_eq!(text.last().map(String::as_str), Some("CHURN PREDICTOR"));
    }

    #[test]
    fn filename_collapses_whitespace_runs() {
        assert_eq!(report_filename("Jane Doe"), "Jane_Doe_Churn_Report.pdf");
        assert_eq!(report_filename("Jane  Q\tDoe"), "Jane_Q_Doe_Churn_Report.pdf");
        assert_eq!(
            ReportContent::from_result(&result(PredictionLabel::Churn)).filename,
            "Jane_Q_Doe_Churn_Report.pdf"
        );
    }
}
