//! Books repository for database operations.
//!
//! Every operation is a single statement against the `books` table; a
//! connection is acquired from the pool for the scope of that statement and
//! released afterwards. SQLite's own write serialization governs concurrent
//! writers.

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, DeleteConfirmation},
};

/// Example rows inserted at startup when the table is empty
const SEED_BOOKS: &[(&str, &str, i32, bool)] = &[
    ("1984", "George Orwell", 1949, true),
    ("O Senhor dos Anéis", "J.R.R. Tolkien", 1954, true),
    ("Dom Casmurro", "Machado de Assis", 1899, true),
    ("Harry Potter e a Pedra Filosofal", "J.K. Rowling", 1997, false),
    ("Cem Anos de Solidão", "Gabriel García Márquez", 1967, true),
    ("O Pequeno Príncipe", "Antoine de Saint-Exupéry", 1943, true),
    ("Clean Code", "Robert C. Martin", 2008, false),
    ("Python Fluente", "Luciano Ramalho", 2015, true),
];

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // BOOTSTRAP
    // =========================================================================

    /// Create the `books` table if it does not exist yet. Idempotent.
    pub async fn bootstrap(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                publication_year INTEGER NOT NULL,
                available BOOLEAN NOT NULL DEFAULT 1
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the example rows, but only when the table is empty.
    /// Returns the number of rows inserted.
    pub async fn seed_if_empty(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            return Ok(0);
        }

        for &(title, author, year, available) in SEED_BOOKS {
            sqlx::query(
                "INSERT INTO books (title, author, publication_year, available) VALUES (?, ?, ?, ?)",
            )
            .bind(title)
            .bind(author)
            .bind(year)
            .bind(available)
            .execute(&self.pool)
            .await?;
        }

        Ok(SEED_BOOKS.len() as u64)
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List all books in storage iteration order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, publication_year, available FROM books",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get a book by id
    pub async fn get(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, publication_year, available FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Insert a new book and return it with its assigned id
    pub async fn create(&self, payload: &BookPayload) -> AppResult<Book> {
        let id = sqlx::query(
            "INSERT INTO books (title, author, publication_year, available) VALUES (?, ?, ?, ?)",
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.publication_year)
        .bind(payload.available)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.get(id).await
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Replace all mutable fields of an existing book
    pub async fn update(&self, id: i64, payload: &BookPayload) -> AppResult<Book> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, publication_year = ?, available = ?
            WHERE id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.publication_year)
        .bind(payload.available)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        self.get(id).await
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Remove a book and return a confirmation naming it
    pub async fn delete(&self, id: i64) -> AppResult<DeleteConfirmation> {
        let book = self.get(id).await?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteConfirmation {
            message: format!("Book '{}' deleted", book.title),
            id,
        })
    }
}
