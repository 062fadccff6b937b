//! Movie recommendation service
//!
//! Serves three independent recommendation strategies over an immutable
//! in-memory movie catalog and rating log: popularity within a genre,
//! content similarity over TF-IDF genre vectors, and collaborative filtering
//! over user rating vectors.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
