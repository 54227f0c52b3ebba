pub mod config;
pub mod errors;
pub mod graph;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;
pub mod taxonomy;
pub mod timeline;
