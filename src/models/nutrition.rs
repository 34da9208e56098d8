use serde::{Deserialize, Serialize};

/// The four tracked nutrition fields, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    /// All fields in the fixed output order.
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Lowercase key used in field names and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

/// One value per nutrition field.
///
/// Settings hold `f64` targets and margins; generated rows hold rounded `i64`s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues<T = f64> {
    pub calories: T,
    pub protein: T,
    pub carbs: T,
    pub fat: T,
}

/// One day's generated values.
pub type Row = NutritionValues<i64>;

impl<T: Copy> NutritionValues<T> {
    pub fn new(calories: T, protein: T, carbs: T, fat: T) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Value of a single field.
    pub fn get(&self, nutrient: Nutrient) -> T {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Mutable reference to a single field.
    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut T {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }

    /// Values in table order (calories, protein, carbs, fat).
    pub fn to_array(&self) -> [T; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }

    /// Combine two records field by field, in table order.
    ///
    /// Stops at the first error.
    pub fn try_zip_with<U, E>(
        &self,
        other: &Self,
        mut f: impl FnMut(Nutrient, T, T) -> Result<U, E>,
    ) -> Result<NutritionValues<U>, E> {
        Ok(NutritionValues {
            calories: f(Nutrient::Calories, self.calories, other.calories)?,
            protein: f(Nutrient::Protein, self.protein, other.protein)?,
            carbs: f(Nutrient::Carbs, self.carbs, other.carbs)?,
            fat: f(Nutrient::Fat, self.fat, other.fat)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_get_mut() {
        let mut values = NutritionValues::new(2000.0, 150.0, 250.0, 65.0);
        assert_eq!(values.get(Nutrient::Carbs), 250.0);

        *values.get_mut(Nutrient::Fat) = 70.0;
        assert_eq!(values.fat, 70.0);
    }

    #[test]
    fn test_to_array_order() {
        let row: Row = NutritionValues::new(1, 2, 3, 4);
        assert_eq!(row.to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_try_zip_with_visits_fields_in_order() {
        let a = NutritionValues::new(1.0, 2.0, 3.0, 4.0);
        let b = NutritionValues::new(10.0, 20.0, 30.0, 40.0);
        let mut seen = Vec::new();

        let sum: NutritionValues<f64> = a
            .try_zip_with(&b, |n, x, y| {
                seen.push(n);
                Ok::<_, ()>(x + y)
            })
            .unwrap();

        assert_eq!(seen, Nutrient::ALL.to_vec());
        assert_eq!(sum, NutritionValues::new(11.0, 22.0, 33.0, 44.0));
    }

    #[test]
    fn test_try_zip_with_stops_on_error() {
        let a = NutritionValues::new(1.0, -2.0, 3.0, 4.0);
        let mut calls = 0;
        let result: Result<NutritionValues<f64>, Nutrient> = a.try_zip_with(&a, |n, x, _| {
            calls += 1;
            if x < 0.0 { Err(n) } else { Ok(x) }
        });

        assert_eq!(result, Err(Nutrient::Protein));
        assert_eq!(calls, 2);
    }
}
