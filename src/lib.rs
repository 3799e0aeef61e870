/*****************************************************************************************
 *
 *  VinylStore – Lightweight Album Catalog Microservice in Rust
 *  -----------------------------------------------------------
 *
 *  In-memory CRUD over album records (id, title, artist, price).
 *
 *****************************************************************************************/

pub mod app;
pub mod config;
pub mod errors;
pub mod respond;
pub mod routes;
pub mod services;
pub mod state;
