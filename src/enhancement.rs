//! Extras que envuelven una comida y suman precio, tiempo y descripcion.
use std::rc::Rc;

use crate::{
    constants::{
        BACON_EXTRA_MINUTES, BACON_PRICE_CENTS, CHEESE_EXTRA_MINUTES, CHEESE_PRICE_CENTS,
        SAUCE_EXTRA_MINUTES, SAUCE_PRICE_CENTS,
    },
    meal::{Meal, SharedMeal},
    money::{from_cents, Money},
    trace::Trace,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    Cheese,
    Bacon,
    Sauce,
}

impl Extra {
    pub fn label(&self) -> &'static str {
        match self {
            Extra::Cheese => "Extra Cheese",
            Extra::Bacon => "Bacon",
            Extra::Sauce => "Special Sauce",
        }
    }

    pub fn price(&self) -> Money {
        from_cents(match self {
            Extra::Cheese => CHEESE_PRICE_CENTS,
            Extra::Bacon => BACON_PRICE_CENTS,
            Extra::Sauce => SAUCE_PRICE_CENTS,
        })
    }

    pub fn extra_minutes(&self) -> u32 {
        match self {
            Extra::Cheese => CHEESE_EXTRA_MINUTES,
            Extra::Bacon => BACON_EXTRA_MINUTES,
            Extra::Sauce => SAUCE_EXTRA_MINUTES,
        }
    }

    fn preparation_step(&self) -> &'static str {
        match self {
            Extra::Cheese => "Adding extra cheese topping...",
            Extra::Bacon => "Adding crispy bacon strips...",
            Extra::Sauce => "Drizzling special house sauce...",
        }
    }

    /// Envuelve la comida con este extra. La comida envuelta no se modifica,
    /// asi que puede envolverse varias veces en cadenas independientes.
    pub fn wrap(self, meal: SharedMeal, trace: &dyn Trace) -> SharedMeal {
        trace.record(&format!(
            "Decorator: Adding {} (+${:.2})",
            self.label(),
            self.price()
        ));
        Rc::new(EnhancedMeal { extra: self, inner: meal })
    }
}

/// Comida con un extra aplicado
pub struct EnhancedMeal {
    extra: Extra,
    inner: SharedMeal,
}

impl EnhancedMeal {
    pub fn extra(&self) -> Extra {
        self.extra
    }
}

impl Meal for EnhancedMeal {
    fn description(&self) -> String {
        format!("{}, with {}", self.inner.description(), self.extra.label())
    }

    fn price(&self) -> Money {
        self.inner.price() + self.extra.price()
    }

    fn cooking_time(&self) -> u32 {
        self.inner.cooking_time() + self.extra.extra_minutes()
    }

    fn prepare(&self, trace: &dyn Trace) {
        self.inner.prepare(trace);
        trace.record(self.extra.preparation_step());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RecordingTrace;

    struct BasicBurger;

    impl Meal for BasicBurger {
        fn description(&self) -> String {
            "Basic Burger".to_string()
        }

        fn price(&self) -> Money {
            from_cents(899)
        }

        fn cooking_time(&self) -> u32 {
            10
        }

        fn prepare(&self, trace: &dyn Trace) {
            trace.record("Preparing Basic Burger...");
        }
    }

    #[test]
    fn should_add_every_layer_in_order() {
        let trace = RecordingTrace::new();
        let base: SharedMeal = Rc::new(BasicBurger);
        let meal = Extra::Cheese.wrap(base, &trace);
        let meal = Extra::Bacon.wrap(meal, &trace);
        let meal = Extra::Sauce.wrap(meal, &trace);

        assert_eq!(from_cents(1399), meal.price());
        assert_eq!(13, meal.cooking_time());
        assert_eq!(
            "Basic Burger, with Extra Cheese, with Bacon, with Special Sauce",
            meal.description()
        );
    }

    #[test]
    fn should_depend_on_wrapping_order_only_for_the_description() {
        let trace = RecordingTrace::new();
        let base: SharedMeal = Rc::new(BasicBurger);
        let first = Extra::Bacon.wrap(Extra::Cheese.wrap(base.clone(), &trace), &trace);
        let second = Extra::Cheese.wrap(Extra::Bacon.wrap(base, &trace), &trace);

        assert_eq!(first.price(), second.price());
        assert_eq!(first.cooking_time(), second.cooking_time());
        assert_eq!("Basic Burger, with Extra Cheese, with Bacon", first.description());
        assert_eq!("Basic Burger, with Bacon, with Extra Cheese", second.description());
    }

    #[test]
    fn should_keep_independent_chains_over_the_same_base() {
        let trace = RecordingTrace::new();
        let base: SharedMeal = Rc::new(BasicBurger);
        let cheesy = Extra::Cheese.wrap(base.clone(), &trace);
        let saucy = Extra::Sauce.wrap(base.clone(), &trace);

        assert_eq!("Basic Burger, with Extra Cheese", cheesy.description());
        assert_eq!("Basic Burger, with Special Sauce", saucy.description());
        assert_eq!("Basic Burger", base.description());
        assert_eq!(from_cents(899), base.price());
        assert_eq!(10, saucy.cooking_time());
    }

    #[test]
    fn should_trace_the_layer_price() {
        let trace = RecordingTrace::new();
        Extra::Bacon.wrap(Rc::new(BasicBurger), &trace);
        assert_eq!(vec!["Decorator: Adding Bacon (+$2.50)".to_string()], trace.lines());
    }

    #[test]
    fn should_prepare_inner_meal_first() {
        let trace = RecordingTrace::new();
        let meal = Extra::Cheese.wrap(Rc::new(BasicBurger), &trace);
        trace.clear();
        meal.prepare(&trace);
        assert_eq!(
            vec![
                "Preparing Basic Burger...".to_string(),
                "Adding extra cheese topping...".to_string(),
            ],
            trace.lines()
        );
    }

    #[test]
    fn should_expose_the_applied_extra() {
        let meal = EnhancedMeal {
            extra: Extra::Sauce,
            inner: Rc::new(BasicBurger),
        };
        assert_eq!(Extra::Sauce, meal.extra());
        assert_eq!(10, meal.cooking_time());
    }
}
