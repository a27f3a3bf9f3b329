use std::io;

use actix_web::{middleware, web, App, HttpServer};

use pizza_restaurants_api::config::Config;
use pizza_restaurants_api::{db, handlers};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // set up database connection pool
    let pool = db::build_pool(&config.database_url, config.pool_size)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!(
        "starting HTTP server at http://{}:{} (database {})",
        config.host,
        config.port,
        config.database_url
    );

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
