use actix_web::{HttpResponse, Responder, get, patch, post, web};

use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::InMemoryRepository;
use crate::routes::error_body;
use crate::services::{ServiceError, products};

#[post("/products")]
/// Create a product and return the full record including its assigned id.
pub async fn create_product(
    repo: web::Data<InMemoryRepository>,
    form: web::Json<CreateProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products")]
/// Return the full catalog snapshot in insertion order.
pub async fn list_products(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match products::list_products(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/search")]
/// Return the products matching the supplied criteria.
///
/// All criteria are optional; an empty query returns the whole catalog.
pub async fn search_products(
    repo: web::Data<InMemoryRepository>,
    params: web::Query<products::SearchQuery>,
) -> impl Responder {
    match products::search_products(repo.get_ref(), params.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to search products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{id}")]
/// Return a single product, or `404` when the id is unknown.
pub async fn get_product(
    repo: web::Data<InMemoryRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();

    match products::get_product(repo.get_ref(), id) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => {
            HttpResponse::NotFound().json(error_body(format!("Product with ID {id} not found")))
        }
        Err(err) => {
            log::error!("Failed to fetch product {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[patch("/products/{id}")]
/// Apply a partial update; omitted fields keep their prior values.
pub async fn update_product(
    repo: web::Data<InMemoryRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateProductForm>,
) -> impl Responder {
    let id = path.into_inner();

    match products::update_product(repo.get_ref(), id, form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound(id)) => {
            HttpResponse::NotFound().json(error_body(format!("Product with ID {id} not found")))
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to update product {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
