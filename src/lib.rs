pub mod cli;
pub mod error;
pub mod generator;
pub mod input;
pub mod interface;
pub mod models;
pub mod output;
pub mod session;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{Nutrient, NutritionValues, Row, Settings, SettingsField};
pub use session::Session;
