use crate::models::NutritionValues;

/// Number of days generated on first run.
pub const DEFAULT_DAY_COUNT: u32 = 7;

/// Default daily targets: calories, protein, carbs, fat.
pub const DEFAULT_TARGETS: NutritionValues = NutritionValues {
    calories: 2000.0,
    protein: 150.0,
    carbs: 250.0,
    fat: 65.0,
};

/// Default symmetric error margins around each target.
pub const DEFAULT_MARGINS: NutritionValues = NutritionValues {
    calories: 100.0,
    protein: 10.0,
    carbs: 20.0,
    fat: 5.0,
};
