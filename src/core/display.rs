//! What a refresh hands to the render sink.

use crate::utils::date::format_millis;
use crate::utils::formatting::days_label;

pub const NO_RECORD: &str = "No record yet";
pub const NO_STREAK: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub last_water: Option<i64>,
    pub streak_days: Option<i64>,
    pub high_score: i64,
    /// Most recent first.
    pub history: Vec<i64>,
}

impl DisplayModel {
    pub fn last_water_text(&self, date_format: &str) -> String {
        self.last_water
            .map(|ts| format_millis(ts, date_format))
            .unwrap_or_else(|| NO_RECORD.to_string())
    }

    pub fn streak_text(&self) -> String {
        self.streak_days
            .map(days_label)
            .unwrap_or_else(|| NO_STREAK.to_string())
    }

    pub fn high_score_text(&self) -> String {
        days_label(self.high_score)
    }

    pub fn history_texts(&self, date_format: &str) -> Vec<String> {
        self.history
            .iter()
            .map(|ts| format_millis(*ts, date_format))
            .collect()
    }
}
