//! Book model and request payloads.
//!
//! The catalog has a single entity: a book with a title, an author, a
//! publication year and an availability flag. `id` is assigned by storage
//! on insert and immutable afterwards.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full book model (DB + API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available: bool,
}

/// Create/update request: a full book without `id`.
///
/// The four field constraints below are the complete validation surface;
/// they are evaluated before any storage access.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(
        min = 1,
        max = 2025,
        message = "publication_year must be between 1 and 2025"
    ))]
    pub publication_year: i32,
    /// Defaults to `true` when absent from the payload
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Response body for a successful delete, naming the removed book
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
    pub id: i64,
}
