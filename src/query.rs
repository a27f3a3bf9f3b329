use diesel::prelude::*;

use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

pub fn find_all_restaurants(conn: &mut SqliteConnection) -> QueryResult<Vec<Restaurant>> {
    restaurants::table
        .select(Restaurant::as_select())
        .load(conn)
}

pub fn find_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Restaurant>> {
    restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()
}

/// Every pizza a restaurant serves, paired with the pizza row itself.
pub fn find_restaurant_pizzas(
    conn: &mut SqliteConnection,
    restaurant: &Restaurant,
) -> QueryResult<Vec<(RestaurantPizza, Pizza)>> {
    RestaurantPizza::belonging_to(restaurant)
        .inner_join(pizzas::table)
        .select((RestaurantPizza::as_select(), Pizza::as_select()))
        .load(conn)
}

pub fn find_all_pizzas(conn: &mut SqliteConnection) -> QueryResult<Vec<Pizza>> {
    pizzas::table.select(Pizza::as_select()).load(conn)
}

pub fn find_pizza(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Pizza>> {
    pizzas::table
        .find(id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()
}

/// Removes the restaurant and its restaurant pizzas in one transaction.
///
/// Returns `None` when no restaurant has that id, otherwise the number of
/// restaurant pizzas removed along with it.
pub fn delete_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<usize>> {
    conn.transaction(|conn| {
        if find_restaurant(conn, id)?.is_none() {
            return Ok(None);
        }

        let removed = diesel::delete(
            restaurant_pizzas::table.filter(restaurant_pizzas::restaurant_id.eq(id)),
        )
        .execute(conn)?;
        diesel::delete(restaurants::table.find(id)).execute(conn)?;

        Ok(Some(removed))
    })
}

pub fn insert_restaurant_pizza(
    conn: &mut SqliteConnection,
    new: &NewRestaurantPizza,
) -> QueryResult<RestaurantPizza> {
    conn.transaction(|conn| {
        diesel::insert_into(restaurant_pizzas::table)
            .values(new)
            .returning(RestaurantPizza::as_returning())
            .get_result(conn)
    })
}

pub fn insert_restaurant(
    conn: &mut SqliteConnection,
    new: &NewRestaurant,
) -> QueryResult<Restaurant> {
    diesel::insert_into(restaurants::table)
        .values(new)
        .returning(Restaurant::as_returning())
        .get_result(conn)
}

pub fn insert_pizza(conn: &mut SqliteConnection, new: &NewPizza) -> QueryResult<Pizza> {
    diesel::insert_into(pizzas::table)
        .values(new)
        .returning(Pizza::as_returning())
        .get_result(conn)
}
