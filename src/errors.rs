//! Errores del restaurante.

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RestaurantError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Listener {listener} failed: {reason}")]
    NotificationFailed { listener: String, reason: String },

    #[error("Orders file error: {0}")]
    OrdersFile(String),
}

// Se guarda el mensaje y no el error de origen para poder comparar errores en los tests
impl From<std::io::Error> for RestaurantError {
    fn from(err: std::io::Error) -> Self {
        RestaurantError::OrdersFile(err.to_string())
    }
}

impl From<serde_json::Error> for RestaurantError {
    fn from(err: serde_json::Error) -> Self {
        RestaurantError::OrdersFile(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn should_prefix_each_kind_of_error() {
        assert_eq!(
            "Invalid argument: Meal type cannot be empty",
            RestaurantError::InvalidArgument("Meal type cannot be empty".to_string()).to_string()
        );
        assert_eq!(
            "Invalid state: Dough must be set before building pizza",
            RestaurantError::InvalidState("Dough must be set before building pizza".to_string())
                .to_string()
        );
        assert_eq!(
            "Listener Kitchen failed: offline",
            RestaurantError::NotificationFailed {
                listener: "Kitchen".to_string(),
                reason: "offline".to_string(),
            }
            .to_string()
        );
    }

    #[test]
    fn should_convert_io_errors_into_orders_file_errors() {
        let err: RestaurantError = Error::new(ErrorKind::NotFound, "orders.json missing").into();
        assert_eq!(RestaurantError::OrdersFile("orders.json missing".to_string()), err);
        assert_eq!("Orders file error: orders.json missing", err.to_string());
    }

    #[test]
    fn should_convert_json_errors_into_orders_file_errors() {
        let parse_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: RestaurantError = parse_error.into();
        assert_eq!(true, matches!(err, RestaurantError::OrdersFile(_)));
        assert_eq!(true, err.to_string().starts_with("Orders file error: "));
    }

    #[test]
    fn should_work_as_a_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(RestaurantError::InvalidState("closed".to_string()));
        assert_eq!("Invalid state: closed", err.to_string());
    }
}
