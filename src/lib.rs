pub mod auth;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod templates_structs;
