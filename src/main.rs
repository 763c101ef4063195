use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use product_catalog::repository::InMemoryRepository;
use product_catalog::routes::products::{
    create_product, get_product, list_products, search_products, update_product,
};
use product_catalog::routes::query::run_query;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    // Created once so every worker shares the same catalog.
    let repo = InMemoryRepository::new();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            // `/products/search` must be registered before `/products/{id}`
            // so the literal segment wins over the path parameter.
            .service(search_products)
            .service(create_product)
            .service(list_products)
            .service(get_product)
            .service(update_product)
            .service(run_query)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
