//! Lectura de pedidos en lote desde un archivo JSON. Lo usa solo el binario de
//! demostracion, que pasa cada pedido por la fachada como cualquier otro cliente.
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::RestaurantError;
use crate::facade::RestaurantFacade;
use crate::order::OrderSummary;

/// Pedido completo tal como lo recibe la fachada
#[derive(Deserialize, Debug, PartialEq)]
pub struct OrderRequest {
    pub customer_name: String,
    pub meal_type: String,
    #[serde(default)]
    pub add_extras: bool,
    pub dough: String,
    pub topping: String,
    pub payment_method: String,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<OrderRequest>,
}

pub fn parse_order_requests<R: Read>(reader: R) -> Result<Vec<OrderRequest>, RestaurantError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

pub fn read_order_requests<P: AsRef<Path>>(path: P) -> Result<Vec<OrderRequest>, RestaurantError> {
    let file = File::open(path)?;
    parse_order_requests(BufReader::new(file))
}

/// Pasa cada pedido por la fachada y devuelve el resumen de los que se completaron
pub fn place_order_requests(
    facade: &RestaurantFacade,
    requests: Vec<OrderRequest>,
) -> Vec<OrderSummary> {
    let mut summaries = Vec::new();
    for (index, request) in requests.into_iter().enumerate() {
        debug!("[READER] Placing request {}: {:?}", index, request);
        match facade.place_complete_order(
            &request.customer_name,
            &request.meal_type,
            request.add_extras,
            &request.dough,
            &request.topping,
            &request.payment_method,
        ) {
            Some(placed) => summaries.push(placed.order.summary()),
            None => warn!("[READER] Request {} for {} was not placed", index, request.customer_name),
        }
    }
    info!("[READER] No more orders left");
    summaries
}
