//! FILENAME: core/stats-engine/src/tenure.rs
//! Tenure display and retention insight.

use serde::Serialize;

/// Retention bucket for an average tenure in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureInsight {
    Excellent,
    Good,
    Concern,
    Critical,
}

impl TenureInsight {
    pub fn from_years(years: f64) -> Self {
        if years >= 3.0 {
            TenureInsight::Excellent
        } else if years >= 2.0 {
            TenureInsight::Good
        } else if years >= 1.0 {
            TenureInsight::Concern
        } else {
            TenureInsight::Critical
        }
    }

    /// Short label shown next to the average tenure.
    pub fn message(&self) -> &'static str {
        match self {
            TenureInsight::Excellent => "Strong retention",
            TenureInsight::Good => "Healthy retention",
            TenureInsight::Concern => "Monitor turnover",
            TenureInsight::Critical => "High turnover risk",
        }
    }
}

/// `"x.y years"` from one year up, otherwise whole months.
pub fn format_tenure(years: f64) -> String {
    if years >= 1.0 {
        format!("{:.1} years", years)
    } else {
        let months = (years * 12.0).round().max(0.0) as u32;
        format!("{} months", months)
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
