//! Authors repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetail, BookSummary},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(authors)
    }

    /// Get author by ID with its owned books
    pub async fn get_by_id(&self, id: i64) -> AppResult<AuthorDetail> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with ID {} not found.", id)))?;

        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT id, title FROM books WHERE author_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(AuthorDetail {
            id: author.id,
            name: author.name,
            books,
        })
    }

    /// Create a new author
    pub async fn create(&self, name: &str) -> AppResult<Author> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO authors (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(Author {
            id,
            name: name.to_string(),
        })
    }

    /// Create an author together with its initial books in one transaction.
    /// Either everything is persisted or nothing is.
    pub async fn create_with_books(&self, name: &str, titles: &[String]) -> AppResult<Author> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>("INSERT INTO authors (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        for title in titles {
            sqlx::query("INSERT INTO books (title, author_id) VALUES (?, ?)")
                .bind(title)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Author {
            id,
            name: name.to_string(),
        })
    }

    /// Update an author's name
    pub async fn update(&self, id: i64, name: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE authors SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Author with ID {} not found.",
                id
            )));
        }

        Ok(())
    }

    /// Delete an author and all of its books.
    ///
    /// The cascade is explicit: the owned books are removed in the same
    /// transaction before the author row, so no orphaned book survives.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM books WHERE author_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the book deletes
            return Err(AppError::NotFound(format!(
                "Author with ID {} not found.",
                id
            )));
        }

        tx.commit().await?;

        Ok(())
    }
}
