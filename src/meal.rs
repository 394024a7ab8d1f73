//! Comidas del menu y contrato comun a todas las comidas.
use std::rc::Rc;

use crate::{
    constants::{
        BURGER_COOKING_TIME, BURGER_PRICE_CENTS, PIZZA_COOKING_TIME, PIZZA_PRICE_CENTS,
        SALAD_COOKING_TIME, SALAD_PRICE_CENTS,
    },
    money::{from_cents, Money},
    trace::Trace,
};

/// Comida con precio y tiempo de coccion. Las implementaciones son inmutables:
/// `prepare` solo describe los pasos, no cambia estado.
pub trait Meal {
    fn description(&self) -> String;
    fn price(&self) -> Money;
    fn cooking_time(&self) -> u32;
    fn prepare(&self, trace: &dyn Trace);
}

/// Comida compartida entre varias cadenas de extras
pub type SharedMeal = Rc<dyn Meal>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealKind {
    Pizza,
    Burger,
    Salad,
}

impl MealKind {
    pub const ALL: [MealKind; 3] = [MealKind::Pizza, MealKind::Burger, MealKind::Salad];

    /// Busca el tipo de comida sin distinguir mayusculas
    pub fn from_token(token: &str) -> Option<MealKind> {
        match token.to_lowercase().as_str() {
            "pizza" => Some(MealKind::Pizza),
            "burger" => Some(MealKind::Burger),
            "salad" => Some(MealKind::Salad),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealKind::Pizza => "Pizza",
            MealKind::Burger => "Burger",
            MealKind::Salad => "Salad",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MealKind::Pizza => "Margherita Pizza",
            MealKind::Burger => "Classic Cheeseburger",
            MealKind::Salad => "Caesar Salad",
        }
    }

    fn price(&self) -> Money {
        from_cents(match self {
            MealKind::Pizza => PIZZA_PRICE_CENTS,
            MealKind::Burger => BURGER_PRICE_CENTS,
            MealKind::Salad => SALAD_PRICE_CENTS,
        })
    }

    fn cooking_time(&self) -> u32 {
        match self {
            MealKind::Pizza => PIZZA_COOKING_TIME,
            MealKind::Burger => BURGER_COOKING_TIME,
            MealKind::Salad => SALAD_COOKING_TIME,
        }
    }

    fn preparation_steps(&self) -> [&'static str; 2] {
        match self {
            MealKind::Pizza => [
                "Adding tomato sauce and mozzarella cheese",
                "Baking in wood-fired oven at 450°F",
            ],
            MealKind::Burger => [
                "Grilling beef patty to perfection",
                "Adding lettuce, tomato, cheese, and special sauce",
            ],
            MealKind::Salad => [
                "Washing fresh romaine lettuce",
                "Adding croutons, parmesan cheese, and Caesar dressing",
            ],
        }
    }
}

/// Comida fija del menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuMeal {
    kind: MealKind,
}

impl MenuMeal {
    pub fn new(kind: MealKind) -> MenuMeal {
        MenuMeal { kind }
    }

    pub fn kind(&self) -> MealKind {
        self.kind
    }
}

impl Meal for MenuMeal {
    fn description(&self) -> String {
        self.kind.name().to_string()
    }

    fn price(&self) -> Money {
        self.kind.price()
    }

    fn cooking_time(&self) -> u32 {
        self.kind.cooking_time()
    }

    fn prepare(&self, trace: &dyn Trace) {
        trace.record(&format!("Preparing {}...", self.kind.label()));
        for step in self.kind.preparation_steps() {
            trace.record(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RecordingTrace;

    #[test]
    fn should_parse_tokens_ignoring_case() {
        assert_eq!(Some(MealKind::Pizza), MealKind::from_token("PiZzA"));
        assert_eq!(Some(MealKind::Burger), MealKind::from_token("burger"));
        assert_eq!(Some(MealKind::Salad), MealKind::from_token("SALAD"));
        assert_eq!(None, MealKind::from_token("sushi"));
        assert_eq!(None, MealKind::from_token(""));
    }

    #[test]
    fn should_describe_the_menu_salad() {
        let salad = MenuMeal::new(MealKind::Salad);
        assert_eq!("Caesar Salad", salad.description());
        assert_eq!(from_cents(699), salad.price());
        assert_eq!(5, salad.cooking_time());
    }

    #[test]
    fn should_prepare_without_changing_the_meal() {
        let trace = RecordingTrace::new();
        let burger = MenuMeal::new(MealKind::Burger);
        burger.prepare(&trace);
        assert_eq!(
            vec![
                "Preparing Burger...".to_string(),
                "Grilling beef patty to perfection".to_string(),
                "Adding lettuce, tomato, cheese, and special sauce".to_string(),
            ],
            trace.lines()
        );
        assert_eq!(MealKind::Burger, burger.kind());
        assert_eq!(from_cents(899), burger.price());
    }
}
