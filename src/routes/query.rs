use actix_web::{HttpResponse, Responder, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::forms::products::CreateProductForm;
use crate::repository::InMemoryRepository;
use crate::services::{ServiceError, products};

/// Operation document accepted by the query binding.
///
/// Mirrors the resolver-style API: one endpoint, the operation selected by a
/// tag inside the body.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum QueryDocument {
    /// Create a product from the supplied input payload.
    CreateProduct { input: CreateProductForm },
    /// Return the full catalog snapshot.
    Products,
    /// Return a single product by id.
    Product { id: i32 },
}

#[post("/query")]
/// Execute one operation document and wrap the outcome in a
/// `data`/`errors` envelope.
pub async fn run_query(
    repo: web::Data<InMemoryRepository>,
    doc: web::Json<QueryDocument>,
) -> impl Responder {
    match doc.into_inner() {
        QueryDocument::CreateProduct { input } => {
            match products::create_product(repo.get_ref(), input) {
                Ok(product) => data_response(product),
                Err(ServiceError::Form(message)) => errors_response(message),
                Err(err) => internal_error(err),
            }
        }
        QueryDocument::Products => match products::list_products(repo.get_ref()) {
            Ok(items) => data_response(items),
            Err(err) => internal_error(err),
        },
        QueryDocument::Product { id } => match products::get_product(repo.get_ref(), id) {
            Ok(Some(product)) => data_response(product),
            Ok(None) => errors_response(format!("Product with ID {id} not found")),
            Err(err) => internal_error(err),
        },
    }
}

fn data_response(value: impl Serialize) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "data": value }))
}

fn errors_response(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "errors": [{ "message": message.into() }] }))
}

fn internal_error(err: ServiceError) -> HttpResponse {
    log::error!("Query operation failed: {err}");
    HttpResponse::InternalServerError().finish()
}
