use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NutriError, Result};
use crate::models::{Nutrient, NutritionValues, Row};

/// Draws randomized daily values around targets.
///
/// Each value is sampled uniformly from `[target - margin, target + margin]`
/// and rounded to the nearest integer (halves away from zero).
pub struct ValueGenerator<R = StdRng> {
    rng: R,
}

impl ValueGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible tables.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ValueGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ValueGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one value in `[round(target - margin), round(target + margin)]`.
    ///
    /// A zero margin returns `round(target)` without drawing. Negative margins
    /// are rejected rather than silently inverting the interval.
    pub fn generate_value(&mut self, target: f64, margin: f64) -> Result<i64> {
        check_bounds(target, margin)?;

        if margin == 0.0 {
            return Ok(target.round() as i64);
        }

        let value = self.rng.gen_range((target - margin)..=(target + margin));
        Ok(value.round() as i64)
    }

    /// Generate one day, drawing each field independently.
    pub fn generate_row(&mut self, targets: &NutritionValues, margins: &NutritionValues) -> Result<Row> {
        targets.try_zip_with(margins, |_, target, margin| self.generate_value(target, margin))
    }

    /// Generate exactly `day_count` independent rows.
    ///
    /// Inputs are validated up front so a bad margin never yields a partial table.
    pub fn generate_table(
        &mut self,
        day_count: u32,
        targets: &NutritionValues,
        margins: &NutritionValues,
    ) -> Result<Vec<Row>> {
        validate_margins(targets, margins)?;

        let rows = (0..day_count)
            .map(|_| self.generate_row(targets, margins))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("generated {} rows", rows.len());
        Ok(rows)
    }
}

/// Check every target/margin pair before generating.
pub fn validate_margins(targets: &NutritionValues, margins: &NutritionValues) -> Result<()> {
    for nutrient in Nutrient::ALL {
        let (target, margin) = (targets.get(nutrient), margins.get(nutrient));
        if let Err(e) = check_bounds(target, margin) {
            log::warn!("{} settings rejected: {}", nutrient.label(), e);
            return Err(e);
        }
    }
    Ok(())
}

fn check_bounds(target: f64, margin: f64) -> Result<()> {
    if !target.is_finite() || !margin.is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "target {} and margin {} must be finite",
            target, margin
        )));
    }

    if margin < 0.0 {
        return Err(NutriError::NegativeMargin(margin));
    }

    let (lo, hi) = (target - margin, target + margin);
    // Uniform sampling scales the width by 1 / (1 - EPSILON); it must stay finite
    let scaled_width = (hi - lo) / (1.0 - f64::EPSILON);
    if !lo.is_finite() || !hi.is_finite() || !scaled_width.is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "interval around {} is out of range",
            target
        )));
    }

    Ok(())
}
