//! Books repository for database operations

use sqlx::{Pool, Row, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{AuthorSummary, Book, BookDetail, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>("SELECT id, title, author_id FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(books)
    }

    /// Get book by ID with its owning author
    pub async fn get_by_id(&self, id: i64) -> AppResult<BookDetail> {
        let row = sqlx::query(
            r#"
            SELECT b.id, b.title, a.id AS author_id, a.name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            WHERE b.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found.", id)))?;

        Ok(BookDetail {
            id: row.get("id"),
            title: row.get("title"),
            author: AuthorSummary {
                id: row.get("author_id"),
                name: row.get("author_name"),
            },
        })
    }

    /// Create a new book owned by an existing author.
    /// The author check and the insert share one transaction so the
    /// foreign-key invariant holds even against a concurrent author delete.
    pub async fn create(&self, title: &str, author_id: i64) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let author_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
                .bind(author_id)
                .fetch_one(&mut *tx)
                .await?;

        if !author_exists {
            return Err(AppError::NotFound(format!(
                "Author with ID {} not found.",
                author_id
            )));
        }

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO books (title, author_id) VALUES (?, ?) RETURNING id",
        )
        .bind(title)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Book {
            id,
            title: title.to_string(),
            author_id,
        })
    }

    /// Update a book's title and/or reassign it to another author
    pub async fn update(&self, id: i64, update: &UpdateBook) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let book_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if !book_exists {
            return Err(AppError::NotFound(format!("Book with ID {} not found.", id)));
        }

        if let Some(author_id) = update.author_id {
            let author_exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
                    .bind(author_id)
                    .fetch_one(&mut *tx)
                    .await?;

            if !author_exists {
                return Err(AppError::NotFound(format!(
                    "Author with ID {} not found.",
                    author_id
                )));
            }
        }

        sqlx::query(
            r#"
            UPDATE books
            SET title = COALESCE(?, title),
                author_id = COALESCE(?, author_id)
            WHERE id = ?
            "#,
        )
        .bind(&update.title)
        .bind(update.author_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with ID {} not found.", id)));
        }

        Ok(())
    }
}
