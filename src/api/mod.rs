//! Stateless JSON surface over the engine. Each request carries its own
//! snapshot of members, expenses and payments.

pub mod handlers;
pub mod models;
pub mod openapi;

pub use handlers::api_routes;
pub use openapi::ApiDoc;
