//! Book management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDetail, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID with its owning author
    pub async fn get(&self, id: i64) -> AppResult<BookDetail> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book owned by an existing author
    pub async fn create(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let created = self
            .repository
            .books
            .create(&book.title, book.author_id)
            .await?;
        tracing::info!("Created book id={} author_id={}", created.id, created.author_id);

        Ok(created)
    }

    /// Update a book's title and/or reassign it to another author
    pub async fn update(&self, id: i64, book: UpdateBook) -> AppResult<()> {
        if book.title.is_none() && book.author_id.is_none() {
            return Err(AppError::Validation(
                "Invalid data, 'title' or 'author_id' is required".to_string(),
            ));
        }
        book.validate()?;

        self.repository.books.update(id, &book).await
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
