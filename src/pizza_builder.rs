//! Armado paso a paso de pizzas personalizadas.
use std::rc::Rc;

use crate::{
    constants::{
        CUSTOM_PIZZA_BASE_COOKING_TIME, CUSTOM_PIZZA_BASE_PRICE_CENTS,
        CUSTOM_PIZZA_TOPPING_PRICE_CENTS,
    },
    errors::RestaurantError,
    meal::Meal,
    money::{from_cents, Money},
    trace::Trace,
};

/// Pizza armada por el cliente. Solo se construye con `PizzaBuilder`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPizza {
    dough: String,
    sauce: String,
    toppings: Vec<String>,
}

impl CustomPizza {
    pub fn dough(&self) -> &str {
        &self.dough
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

impl Meal for CustomPizza {
    fn description(&self) -> String {
        format!(
            "Custom Pizza with {}, {} and {} toppings",
            self.dough,
            self.sauce,
            self.toppings.len()
        )
    }

    fn price(&self) -> Money {
        from_cents(CUSTOM_PIZZA_BASE_PRICE_CENTS)
            + Money::from(self.toppings.len()) * from_cents(CUSTOM_PIZZA_TOPPING_PRICE_CENTS)
    }

    fn cooking_time(&self) -> u32 {
        CUSTOM_PIZZA_BASE_COOKING_TIME + self.toppings.len() as u32
    }

    fn prepare(&self, trace: &dyn Trace) {
        trace.record("Preparing Custom Pizza:");
        trace.record(&format!("- Dough: {}", self.dough));
        trace.record(&format!("- Sauce: {}", self.sauce));
        trace.record(&format!("- Toppings: {}", self.toppings.join(", ")));
    }
}

/// Acumula masa, salsa e ingredientes. Cada `build` devuelve una pizza nueva
/// con lo acumulado hasta ese momento; el acumulador no se reinicia.
pub struct PizzaBuilder {
    dough: Option<String>,
    sauce: Option<String>,
    toppings: Vec<String>,
    trace: Rc<dyn Trace>,
}

impl PizzaBuilder {
    pub fn new(trace: Rc<dyn Trace>) -> PizzaBuilder {
        PizzaBuilder {
            dough: None,
            sauce: None,
            toppings: Vec::new(),
            trace,
        }
    }

    pub fn set_dough(&mut self, dough: &str) -> &mut Self {
        self.dough = Some(dough.to_string());
        self.trace.record(&format!("Builder: Dough set to {}", dough));
        self
    }

    pub fn set_sauce(&mut self, sauce: &str) -> &mut Self {
        self.sauce = Some(sauce.to_string());
        self.trace.record(&format!("Builder: Sauce set to {}", sauce));
        self
    }

    pub fn add_topping(&mut self, topping: &str) -> &mut Self {
        self.toppings.push(topping.to_string());
        self.trace
            .record(&format!("Builder: Added topping - {}", topping));
        self
    }

    pub fn build(&self) -> Result<CustomPizza, RestaurantError> {
        let dough = required(&self.dough, "Dough")?;
        let sauce = required(&self.sauce, "Sauce")?;
        if self.toppings.is_empty() {
            self.trace.warn("Warning: Building pizza with no toppings");
        }

        self.trace.record("Builder: Pizza construction complete!");
        Ok(CustomPizza {
            dough,
            sauce,
            toppings: self.toppings.clone(),
        })
    }
}

fn required(value: &Option<String>, field: &str) -> Result<String, RestaurantError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(RestaurantError::InvalidState(format!(
            "{} must be set before building pizza",
            field
        ))),
    }
}
