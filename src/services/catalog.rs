//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, DeleteConfirmation},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Create a new book. The payload is validated before any storage access.
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        self.repository.books.create(&payload).await
    }

    /// Replace all mutable fields of an existing book. Same validation as create.
    pub async fn update_book(&self, id: i64, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        self.repository.books.update(id, &payload).await
    }

    /// Delete a book and return a confirmation naming it
    pub async fn delete_book(&self, id: i64) -> AppResult<DeleteConfirmation> {
        self.repository.books.delete(id).await
    }
}
