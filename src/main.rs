pub mod constants;
pub mod enhancement;
pub mod errors;
pub mod facade;
pub mod listener;
pub mod meal;
pub mod meal_catalog;
pub mod money;
pub mod order;
pub mod orders_reader;
pub mod pacing;
pub mod payment;
pub mod payment_context;
pub mod pizza_builder;
pub mod trace;

use std::{env, rc::Rc};

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use enhancement::Extra;
use errors::RestaurantError;
use facade::RestaurantFacade;
use listener::{CustomerListener, KitchenListener, Listener, WaiterListener};
use meal::Meal;
use meal_catalog::MealCatalog;
use money::from_cents;
use order::Order;
use orders_reader::{place_order_requests, read_order_requests};
use pacing::{Pacer, ThreadPacing};
use payment::{CashPayment, CreditCardPayment};
use payment_context::PaymentContext;
use pizza_builder::PizzaBuilder;
use trace::{LogTrace, Trace};

/// Precio en centavos de la bebida que se suma en la demostracion guiada
const DRINK_PRICE_CENTS: i64 = 250;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start logger: {}", err);
    }

    let trace: Rc<dyn Trace> = Rc::new(LogTrace);
    let pacer: Rc<dyn Pacer> = Rc::new(ThreadPacing);

    let result = match env::args().nth(1) {
        Some(path) => run_order_requests(&path, trace, pacer),
        None => run_guided_demo(trace, pacer),
    };
    if let Err(err) = result {
        error!("{}", err);
    }
}

fn run_order_requests(
    path: &str,
    trace: Rc<dyn Trace>,
    pacer: Rc<dyn Pacer>,
) -> Result<(), RestaurantError> {
    let requests = read_order_requests(path)?;
    let facade = RestaurantFacade::new(trace, pacer);
    for summary in place_order_requests(&facade, requests) {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn run_guided_demo(trace: Rc<dyn Trace>, pacer: Rc<dyn Pacer>) -> Result<(), RestaurantError> {
    let catalog = MealCatalog::new(trace.clone());
    let basic_burger = catalog.create_meal("Burger")?;
    trace.record(&format!(
        "Created: {} (${:.2})",
        basic_burger.description(),
        basic_burger.price()
    ));
    pacer.pause(500);

    let deluxe_burger = Extra::Cheese.wrap(basic_burger, trace.as_ref());
    let deluxe_burger = Extra::Bacon.wrap(deluxe_burger, trace.as_ref());
    trace.record(&format!(
        "Enhanced: {} (${:.2})",
        deluxe_burger.description(),
        deluxe_burger.price()
    ));
    pacer.pause(500);

    let custom_pizza = PizzaBuilder::new(trace.clone())
        .set_dough("Thin Crust")
        .set_sauce("BBQ Sauce")
        .add_topping("Chicken")
        .add_topping("Mushrooms")
        .add_topping("Onions")
        .build()?;
    trace.record(&format!(
        "Built: {} (${:.2})",
        custom_pizza.description(),
        custom_pizza.price()
    ));
    custom_pizza.prepare(trace.as_ref());
    pacer.pause(500);

    let mut order = Order::new(1001, "Alice Johnson", trace.clone());
    order.add_item(&deluxe_burger.description());
    order.add_item("Coca Cola");
    let kitchen: Rc<dyn Listener> = Rc::new(KitchenListener::new("Main Kitchen"));
    let customer: Rc<dyn Listener> = Rc::new(CustomerListener::new("Alice Johnson", "+1-555-0123"));
    let waiter: Rc<dyn Listener> = Rc::new(WaiterListener::new("Bob", 5));
    order.attach(kitchen);
    order.attach(customer);
    order.attach(waiter.clone());
    pacer.pause(800);

    order.set_status("Confirmed")?;
    pacer.pause(1000);
    order.set_status("Preparing")?;
    pacer.pause(1000);
    order.set_status("Ready")?;
    pacer.pause(500);

    let total = deluxe_burger.price() + from_cents(DRINK_PRICE_CENTS);
    let mut payment = PaymentContext::new(trace.clone(), pacer.clone());
    payment.select_method(Box::new(CashPayment::new(from_cents(1000))));
    if !payment.execute_payment(total)? {
        payment.select_method(Box::new(CreditCardPayment::new(
            "4532123456789012",
            "Alice Johnson",
            "123",
            "12/25",
        )));
        if payment.execute_payment(total)? {
            order.detach(&waiter);
            order.set_status("Paid")?;
        }
    }
    order.display();
    pacer.pause(500);

    let facade = RestaurantFacade::new(trace, pacer.clone());
    if let Some(mut placed) = facade.place_complete_order(
        "Charlie Brown",
        "Pizza",
        true,
        "Thin Crust",
        "Pepperoni",
        "PayPal",
    ) {
        let summary = facade.view_order_status(&placed.order);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        pacer.pause(1000);
        facade.cancel_order(&mut placed.order)?;
    }
    Ok(())
}
