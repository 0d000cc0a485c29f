//! Estante Library Catalog Manager
//!
//! A Rust implementation of the Estante book catalog: a REST JSON catalog
//! service backed by a single SQLite table, plus a presentation gateway that
//! renders an HTML list/form page and re-exposes the catalog API as JSON.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all catalog handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
