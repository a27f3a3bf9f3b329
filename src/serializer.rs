use serde::Serialize;
use serde_json::Number;

use crate::models;

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PizzaSummary {
    pub id: i32,
    pub ingredients: String,
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CreatedRestaurantPizza {
    pub id: i32,
    pub pizza: PizzaSummary,
    pub pizza_id: i32,
    pub price: Number,
    pub restaurant: RestaurantSummary,
    pub restaurant_id: i32,
}

impl From<models::Restaurant> for RestaurantSummary {
    fn from(r: models::Restaurant) -> Self {
        RestaurantSummary {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

impl From<models::Pizza> for PizzaSummary {
    fn from(p: models::Pizza) -> Self {
        PizzaSummary {
            id: p.id,
            ingredients: p.ingredients,
            name: p.name,
        }
    }
}

pub fn serialize_restaurant_detail(
    restaurant: models::Restaurant,
    restaurant_pizzas: Vec<(models::RestaurantPizza, models::Pizza)>,
) -> RestaurantDetail {
    RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(|(rp, pizza)| RestaurantPizzaEntry {
                id: rp.id,
                price: rp.price,
                pizza_id: rp.pizza_id,
                restaurant_id: rp.restaurant_id,
                pizza: pizza.into(),
            })
            .collect(),
    }
}

/// `requested_price` is echoed verbatim so an integer price stays an integer.
pub fn serialize_created_restaurant_pizza(
    restaurant_pizza: models::RestaurantPizza,
    requested_price: Number,
    pizza: models::Pizza,
    restaurant: models::Restaurant,
) -> CreatedRestaurantPizza {
    CreatedRestaurantPizza {
        id: restaurant_pizza.id,
        pizza: pizza.into(),
        pizza_id: restaurant_pizza.pizza_id,
        price: requested_price,
        restaurant: restaurant.into(),
        restaurant_id: restaurant_pizza.restaurant_id,
    }
}
