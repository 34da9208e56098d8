use serde::{Deserialize, Serialize};

use crate::generator::constants::{DEFAULT_DAY_COUNT, DEFAULT_MARGINS, DEFAULT_TARGETS};
use crate::input::{parse_day_count, parse_or_default};
use crate::models::{NutritionValues, SettingsField};

/// Persisted generator configuration.
///
/// Field names on disk match the layout older saves were written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "savedNumDays")]
    pub day_count: u32,

    #[serde(rename = "savedTargets")]
    pub targets: NutritionValues,

    #[serde(rename = "savedErrors")]
    pub error_margins: NutritionValues,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_count: DEFAULT_DAY_COUNT,
            targets: DEFAULT_TARGETS,
            error_margins: DEFAULT_MARGINS,
        }
    }
}

impl Settings {
    /// Current value of a field, as a float.
    pub fn value(&self, field: SettingsField) -> f64 {
        match field {
            SettingsField::DayCount => f64::from(self.day_count),
            SettingsField::Target(n) => self.targets.get(n),
            SettingsField::Margin(n) => self.error_margins.get(n),
        }
    }

    /// Apply raw user text to a field using the parse-or-default policy.
    pub fn apply_input(&mut self, field: SettingsField, text: &str) {
        match field {
            SettingsField::DayCount => self.day_count = parse_day_count(text),
            SettingsField::Target(n) => *self.targets.get_mut(n) = parse_or_default(text),
            SettingsField::Margin(n) => *self.error_margins.get_mut(n) = parse_or_default(text),
        }
    }
}
