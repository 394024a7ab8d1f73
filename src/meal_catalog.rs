//! Fabrica de comidas del menu.
use std::rc::Rc;

use log::debug;

use crate::{
    errors::RestaurantError,
    meal::{MealKind, MenuMeal, SharedMeal},
    trace::Trace,
};

/// Crea comidas a partir del nombre del tipo. No guarda estado entre llamadas.
pub struct MealCatalog {
    trace: Rc<dyn Trace>,
}

impl MealCatalog {
    pub fn new(trace: Rc<dyn Trace>) -> MealCatalog {
        MealCatalog { trace }
    }

    pub fn create_meal(&self, meal_type: &str) -> Result<SharedMeal, RestaurantError> {
        if meal_type.trim().is_empty() {
            return Err(RestaurantError::InvalidArgument(
                "Meal type cannot be empty".to_string(),
            ));
        }
        let kind = MealKind::from_token(meal_type).ok_or_else(|| {
            RestaurantError::InvalidArgument(format!(
                "Unknown meal type: {}. Available types: {}",
                meal_type,
                Self::available_meals().join(", ")
            ))
        })?;

        debug!("[CATALOG] Token {:?} resolved to {:?}", meal_type, kind);
        self.trace
            .record(&format!("Factory: Creating {}...", kind.label()));
        Ok(Rc::new(MenuMeal::new(kind)))
    }

    pub fn available_meals() -> Vec<&'static str> {
        MealKind::ALL.iter().map(|kind| kind.label()).collect()
    }
}
