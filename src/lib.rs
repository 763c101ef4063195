pub mod domain;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;
