pub mod config;
pub mod controllers;
pub mod extractors;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
