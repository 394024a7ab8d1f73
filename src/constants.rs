//! Parametros de configuracion del restaurante.
//! Los precios se guardan en centavos; ver `money::from_cents`.

/// Precio de la pizza margherita del menu
pub const PIZZA_PRICE_CENTS: i64 = 1299;

/// Minutos de coccion de la pizza margherita
pub const PIZZA_COOKING_TIME: u32 = 15;

/// Precio de la hamburguesa clasica con queso
pub const BURGER_PRICE_CENTS: i64 = 899;

/// Minutos de coccion de la hamburguesa
pub const BURGER_COOKING_TIME: u32 = 10;

/// Precio de la ensalada caesar
pub const SALAD_PRICE_CENTS: i64 = 699;

/// Minutos de preparacion de la ensalada
pub const SALAD_COOKING_TIME: u32 = 5;

/// Precio base de una pizza armada por el cliente, sin ingredientes extra
pub const CUSTOM_PIZZA_BASE_PRICE_CENTS: i64 = 1099;

/// Precio de cada ingrediente agregado a la pizza armada
pub const CUSTOM_PIZZA_TOPPING_PRICE_CENTS: i64 = 150;

/// Tiempo base de coccion de la pizza armada. Se suma un minuto por ingrediente.
pub const CUSTOM_PIZZA_BASE_COOKING_TIME: u32 = 15;

pub const CHEESE_PRICE_CENTS: i64 = 150;
pub const CHEESE_EXTRA_MINUTES: u32 = 1;
pub const BACON_PRICE_CENTS: i64 = 250;
pub const BACON_EXTRA_MINUTES: u32 = 2;
/// La salsa se agrega despues de cocinar, no suma tiempo
pub const SAUCE_PRICE_CENTS: i64 = 100;
pub const SAUCE_EXTRA_MINUTES: u32 = 0;

/// Estado inicial de toda orden
pub const INITIAL_ORDER_STATUS: &str = "Created";

/// Identificador fijo de las ordenes que arma la fachada
pub const FACADE_ORDER_ID: u32 = 2001;

/// Salsa que usa la fachada para la pizza armada
pub const FACADE_PIZZA_SAUCE: &str = "Tomato Sauce";

/// Telefono que se le asigna al cliente en las ordenes de la fachada
pub const FACADE_CUSTOMER_PHONE: &str = "+1-555-9999";

/// Nombre de la cocina que escucha las ordenes de la fachada
pub const FACADE_KITCHEN_NAME: &str = "Kitchen";

/// Credenciales de prueba para pagos con tarjeta desde la fachada
pub const PLACEHOLDER_CARD_NUMBER: &str = "4111111111111111";
pub const PLACEHOLDER_CARD_CVV: &str = "123";
pub const PLACEHOLDER_CARD_EXPIRY: &str = "12/26";

/// Credenciales de prueba para pagos con PayPal desde la fachada
pub const PLACEHOLDER_PAYPAL_EMAIL: &str = "customer@email.com";
pub const PLACEHOLDER_PAYPAL_PASSWORD: &str = "pass123";

/// Tiempo de espera entre cada paso simulado de una pasarela de pago
pub const PAYMENT_STEP_WAIT_IN_MS: u64 = 500;

/// Tiempo de espera entre cada paso de la fachada
pub const FACADE_STEP_WAIT_IN_MS: u64 = 300;

/// Tiempo de espera luego de confirmar una orden en la fachada
pub const FACADE_CONFIRM_WAIT_IN_MS: u64 = 500;
