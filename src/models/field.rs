use std::fmt;
use std::str::FromStr;

use crate::error::NutriError;
use crate::models::Nutrient;

/// An editable settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    DayCount,
    Target(Nutrient),
    Margin(Nutrient),
}

impl SettingsField {
    /// Every field in form order: day count, targets, then margins.
    pub fn all() -> Vec<SettingsField> {
        let mut fields = vec![SettingsField::DayCount];
        fields.extend(Nutrient::ALL.iter().map(|&n| SettingsField::Target(n)));
        fields.extend(Nutrient::ALL.iter().map(|&n| SettingsField::Margin(n)));
        fields
    }

    /// Stable key: `days`, `target.<field>` or `error.<field>`.
    pub fn key(self) -> String {
        match self {
            SettingsField::DayCount => "days".to_string(),
            SettingsField::Target(n) => format!("target.{}", n.key()),
            SettingsField::Margin(n) => format!("error.{}", n.key()),
        }
    }

    /// Prompt label shown in the interactive editor.
    pub fn label(self) -> String {
        match self {
            SettingsField::DayCount => "Number of days".to_string(),
            SettingsField::Target(n) => format!("{} target ({})", n.label(), n.unit()),
            SettingsField::Margin(n) => format!("{} error margin (±{})", n.label(), n.unit()),
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for SettingsField {
    type Err = NutriError;

    /// Exact, case-insensitive key lookup. A bare nutrient name means its target.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if let Some(field) = SettingsField::all().into_iter().find(|f| f.key() == wanted) {
            return Ok(field);
        }

        Nutrient::ALL
            .iter()
            .find(|n| n.key() == wanted)
            .map(|&n| SettingsField::Target(n))
            .ok_or_else(|| NutriError::UnknownField(s.to_string()))
    }
}
