mod field;
mod nutrition;
mod settings;

pub use field::SettingsField;
pub use nutrition::{Nutrient, NutritionValues, Row};
pub use settings::Settings;
