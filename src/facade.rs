//! Punto de entrada simplificado: arma una orden completa usando todos los componentes.
use std::rc::Rc;

use log::{error, info};

use crate::{
    constants::{
        FACADE_CONFIRM_WAIT_IN_MS, FACADE_CUSTOMER_PHONE, FACADE_KITCHEN_NAME, FACADE_ORDER_ID,
        FACADE_PIZZA_SAUCE, FACADE_STEP_WAIT_IN_MS, PLACEHOLDER_CARD_CVV, PLACEHOLDER_CARD_EXPIRY,
        PLACEHOLDER_CARD_NUMBER, PLACEHOLDER_PAYPAL_EMAIL, PLACEHOLDER_PAYPAL_PASSWORD,
    },
    enhancement::Extra,
    errors::RestaurantError,
    listener::{CustomerListener, KitchenListener, Listener},
    meal::Meal,
    meal_catalog::MealCatalog,
    money::Money,
    order::{Order, OrderSummary},
    pacing::Pacer,
    payment::{CreditCardPayment, PayPalPayment, PaymentMethod},
    payment_context::PaymentContext,
    pizza_builder::PizzaBuilder,
    trace::Trace,
};

/// Resultado de una orden completa
pub struct PlacedOrder {
    pub order: Order,
    pub total: Money,
    pub paid: bool,
}

pub struct RestaurantFacade {
    trace: Rc<dyn Trace>,
    pacer: Rc<dyn Pacer>,
}

impl RestaurantFacade {
    pub fn new(trace: Rc<dyn Trace>, pacer: Rc<dyn Pacer>) -> RestaurantFacade {
        RestaurantFacade { trace, pacer }
    }

    /// Crea la comida, le agrega queso si se pidio, arma una pizza, registra la orden,
    /// cobra la suma de ambas y la deja lista. Si algun paso falla se loguea el error
    /// y se devuelve `None`; lo que ya se hizo no se deshace.
    pub fn place_complete_order(
        &self,
        customer_name: &str,
        meal_type: &str,
        add_extras: bool,
        dough: &str,
        topping: &str,
        payment_method: &str,
    ) -> Option<PlacedOrder> {
        self.trace
            .record(&format!("Processing complete order for: {}", customer_name));
        match self.try_place_order(
            customer_name,
            meal_type,
            add_extras,
            dough,
            topping,
            payment_method,
        ) {
            Ok(placed) => {
                info!(
                    "[FACADE] Order #{} complete, total ${:.2}",
                    placed.order.id(),
                    placed.total
                );
                Some(placed)
            }
            Err(err) => {
                error!("[FACADE] Error: {}", err);
                None
            }
        }
    }

    fn try_place_order(
        &self,
        customer_name: &str,
        meal_type: &str,
        add_extras: bool,
        dough: &str,
        topping: &str,
        payment_method: &str,
    ) -> Result<PlacedOrder, RestaurantError> {
        self.trace
            .record(&format!("Using Factory Pattern to create {}", meal_type));
        let mut meal = MealCatalog::new(self.trace.clone()).create_meal(meal_type)?;
        self.trace
            .record(&format!("Base meal created: {}", meal.description()));
        self.pacer.pause(FACADE_STEP_WAIT_IN_MS);

        if add_extras {
            self.trace.record("Using Decorator Pattern to add extras");
            meal = Extra::Cheese.wrap(meal, self.trace.as_ref());
            self.trace
                .record(&format!("Enhanced: {}", meal.description()));
            self.pacer.pause(FACADE_STEP_WAIT_IN_MS);
        }

        self.trace.record("Using Builder Pattern for custom pizza");
        let custom_pizza = PizzaBuilder::new(self.trace.clone())
            .set_dough(dough)
            .set_sauce(FACADE_PIZZA_SAUCE)
            .add_topping(topping)
            .build()?;
        self.trace.record("Custom pizza ready");
        self.pacer.pause(FACADE_STEP_WAIT_IN_MS);

        self.trace
            .record("Using Observer Pattern to set up notifications");
        let mut order = Order::new(FACADE_ORDER_ID, customer_name, self.trace.clone());
        order.add_item(&meal.description());
        order.add_item(&custom_pizza.description());
        let kitchen: Rc<dyn Listener> = Rc::new(KitchenListener::new(FACADE_KITCHEN_NAME));
        let customer: Rc<dyn Listener> =
            Rc::new(CustomerListener::new(customer_name, FACADE_CUSTOMER_PHONE));
        order.attach(kitchen);
        order.attach(customer);
        self.pacer.pause(FACADE_STEP_WAIT_IN_MS);

        order.set_status("Confirmed")?;
        self.pacer.pause(FACADE_CONFIRM_WAIT_IN_MS);

        self.trace.record("Using Strategy Pattern for payment");
        let mut payment = PaymentContext::new(self.trace.clone(), self.pacer.clone());
        payment.select_method(payment_method_for(payment_method, customer_name));
        let total = meal.price() + custom_pizza.price();
        let paid = payment.execute_payment(total)?;
        self.pacer.pause(FACADE_STEP_WAIT_IN_MS);

        order.set_status("Paid")?;
        self.pacer.pause(FACADE_STEP_WAIT_IN_MS);
        order.set_status("Ready")?;

        self.trace.record("ORDER COMPLETE! All 6 patterns worked together.");
        Ok(PlacedOrder { order, total, paid })
    }

    /// Cancela la orden avisando a sus interesados
    pub fn cancel_order(&self, order: &mut Order) -> Result<(), RestaurantError> {
        self.trace
            .record(&format!("CANCELLING ORDER #{}", order.id()));
        self.trace.record("Notifying kitchen to stop preparation");
        order.set_status("Cancelled")?;
        self.trace.record("Refunding payment");
        self.trace
            .record(&format!("Order #{} successfully cancelled", order.id()));
        Ok(())
    }

    pub fn view_order_status(&self, order: &Order) -> OrderSummary {
        self.trace
            .record(&format!("ORDER STATUS - Order #{}", order.id()));
        order.display();
        order.summary()
    }
}

/// Solo "PayPal" elige PayPal; cualquier otro valor paga con tarjeta
fn payment_method_for(payment_method: &str, customer_name: &str) -> Box<dyn PaymentMethod> {
    if payment_method == "PayPal" {
        return Box::new(PayPalPayment::new(
            PLACEHOLDER_PAYPAL_EMAIL,
            PLACEHOLDER_PAYPAL_PASSWORD,
        ));
    }
    Box::new(CreditCardPayment::new(
        PLACEHOLDER_CARD_NUMBER,
        customer_name,
        PLACEHOLDER_CARD_CVV,
        PLACEHOLDER_CARD_EXPIRY,
    ))
}
