use diesel::prelude::*;

use pizza_restaurants_api::config::Config;
use pizza_restaurants_api::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use pizza_restaurants_api::schema::{pizzas, restaurant_pizzas, restaurants};
use pizza_restaurants_api::{db, query};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

// (restaurant index, pizza index, price)
const MENU: [(usize, usize, f64); 3] = [(0, 0, 1.0), (1, 1, 4.0), (2, 2, 5.0)];

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;
    let pool = db::build_pool(&config.database_url, 1)?;
    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;
    db::run_migrations(conn)?;

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        log::info!("clearing existing data");
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;

        let restaurants = RESTAURANTS
            .iter()
            .map(|&(name, address)| {
                query::insert_restaurant(conn, &NewRestaurant { name, address })
            })
            .collect::<QueryResult<Vec<_>>>()?;
        let pizzas = PIZZAS
            .iter()
            .map(|&(name, ingredients)| query::insert_pizza(conn, &NewPizza { name, ingredients }))
            .collect::<QueryResult<Vec<_>>>()?;

        for (restaurant, pizza, price) in MENU {
            query::insert_restaurant_pizza(
                conn,
                &NewRestaurantPizza {
                    price,
                    restaurant_id: restaurants[restaurant].id,
                    pizza_id: pizzas[pizza].id,
                },
            )?;
        }

        log::info!(
            "seeded {} restaurants, {} pizzas and {} restaurant pizzas into {}",
            restaurants.len(),
            pizzas.len(),
            MENU.len(),
            config.database_url
        );
        Ok(())
    })?;

    Ok(())
}
