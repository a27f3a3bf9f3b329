use serde_json::{Map, Number, Value};

use crate::error::{ApiError, MISSING_FIELDS, PRICE_OUT_OF_RANGE};

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 30.0;

const REQUIRED_FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

/// A creation request that passed the field and price checks.
///
/// `price` is what gets stored; `requested_price` is the number exactly as the
/// caller wrote it, echoed back in the creation response.
///
/// The ids are `None` when the payload carried something that cannot be a row id
/// (a string, a fractional number, null); such a reference never resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaPayload {
    pub price: f64,
    pub requested_price: Number,
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}

pub fn validate_restaurant_pizza(
    body: &Map<String, Value>,
) -> Result<RestaurantPizzaPayload, ApiError> {
    if !REQUIRED_FIELDS.iter().all(|key| body.contains_key(*key)) {
        return Err(ApiError::Validation(MISSING_FIELDS));
    }

    let (price, requested_price) = match &body["price"] {
        Value::Number(n) => match n.as_f64() {
            Some(price) if (MIN_PRICE..=MAX_PRICE).contains(&price) => (price, n.clone()),
            _ => return Err(ApiError::Validation(PRICE_OUT_OF_RANGE)),
        },
        _ => return Err(ApiError::Validation(PRICE_OUT_OF_RANGE)),
    };

    Ok(RestaurantPizzaPayload {
        price,
        requested_price,
        pizza_id: as_row_id(&body["pizza_id"]),
        restaurant_id: as_row_id(&body["restaurant_id"]),
    })
}

// whole-number floats such as 1.0 still name row 1
fn as_row_id(value: &Value) -> Option<i32> {
    if let Some(id) = value.as_i64() {
        return i32::try_from(id).ok();
    }
    let id = value.as_f64()?;
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&id);
    (id.fract() == 0.0 && in_range).then(|| id as i32)
}
