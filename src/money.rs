//! Montos de dinero. Se usan decimales exactos para que sumar extras no acumule error.
use rust_decimal::Decimal;

pub type Money = Decimal;

pub fn from_cents(cents: i64) -> Money {
    Decimal::new(cents, 2)
}
