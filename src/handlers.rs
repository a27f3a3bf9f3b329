use actix_web::{delete, get, http::header::ContentType, post, web, HttpResponse};
use serde_json::{Map, Value};

use crate::db::DbPool;
use crate::error::{ApiError, MISSING_FIELDS};
use crate::models::NewRestaurantPizza;
use crate::serializer::{self, PizzaSummary, RestaurantSummary};
use crate::{query, validation};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Code challenge</h1>")
}

#[get("/restaurants")]
async fn get_restaurants(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let restaurants = web::block(move || -> Result<_, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::find_all_restaurants(&mut conn)?)
    })
    .await??;

    let body: Vec<RestaurantSummary> = restaurants.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[get("/restaurants/{id}")]
async fn get_restaurant(
    id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let restaurant = web::block(move || -> Result<_, ApiError> {
        let mut conn = pool.get()?;
        let restaurant =
            query::find_restaurant(&mut conn, id)?.ok_or(ApiError::RestaurantNotFound)?;
        let restaurant_pizzas = query::find_restaurant_pizzas(&mut conn, &restaurant)?;
        Ok(serializer::serialize_restaurant_detail(restaurant, restaurant_pizzas))
    })
    .await??;

    Ok(HttpResponse::Ok().json(restaurant))
}

#[delete("/restaurants/{id}")]
async fn delete_restaurant(
    id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let removed = web::block(move || -> Result<_, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::delete_restaurant(&mut conn, id)?)
    })
    .await??
    .ok_or(ApiError::RestaurantNotFound)?;

    log::info!("deleted restaurant {id} with {removed} restaurant pizzas");
    Ok(HttpResponse::NoContent().finish())
}

#[get("/pizzas")]
async fn get_pizzas(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let pizzas = web::block(move || -> Result<_, ApiError> {
        let mut conn = pool.get()?;
        Ok(query::find_all_pizzas(&mut conn)?)
    })
    .await??;

    let body: Vec<PizzaSummary> = pizzas.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[post("/restaurant_pizzas")]
async fn create_restaurant_pizza(
    body: web::Json<Map<String, Value>>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, ApiError> {
    let payload = validation::validate_restaurant_pizza(&body)?;

    let created = web::block(move || -> Result<_, ApiError> {
        let mut conn = pool.get()?;
        let pizza = match payload.pizza_id {
            Some(id) => query::find_pizza(&mut conn, id)?,
            None => None,
        };
        let restaurant = match payload.restaurant_id {
            Some(id) => query::find_restaurant(&mut conn, id)?,
            None => None,
        };
        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            return Err(ApiError::ReferenceNotFound);
        };

        let new = NewRestaurantPizza {
            price: payload.price,
            restaurant_id: restaurant.id,
            pizza_id: pizza.id,
        };
        let restaurant_pizza = query::insert_restaurant_pizza(&mut conn, &new).map_err(|e| {
            log::warn!("rolled back restaurant pizza {new:?}: {e}");
            ApiError::Persistence(e.to_string())
        })?;

        Ok(serializer::serialize_created_restaurant_pizza(
            restaurant_pizza,
            payload.requested_price,
            pizza,
            restaurant,
        ))
    })
    .await??;

    log::info!(
        "created restaurant pizza {} for restaurant {}",
        created.id,
        created.restaurant_id
    );
    Ok(HttpResponse::Created().json(created))
}

/// Registers every route plus the extractor configs that keep error bodies in JSON.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("unreadable restaurant pizza payload: {err}");
        ApiError::Validation(MISSING_FIELDS).into()
    }))
    // only the restaurant routes take a path id
    .app_data(
        web::PathConfig::default().error_handler(|_err, _req| ApiError::RestaurantNotFound.into()),
    )
    .service(index)
    .service(get_restaurants)
    .service(get_restaurant)
    .service(delete_restaurant)
    .service(get_pizzas)
    .service(create_restaurant_pizza);
}
