//! Author management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Author, AuthorDetail, CreateAuthor, CreateAuthorWithBooks, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Get author by ID with its books
    pub async fn get(&self, id: i64) -> AppResult<AuthorDetail> {
        self.repository.authors.get_by_id(id).await
    }

    /// Create a new author
    pub async fn create(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;

        let created = self.repository.authors.create(&author.name).await?;
        tracing::info!("Created author id={}", created.id);

        Ok(created)
    }

    /// Create an author with its initial books as one atomic unit
    pub async fn create_with_books(&self, author: CreateAuthorWithBooks) -> AppResult<Author> {
        author.validate()?;

        let created = self
            .repository
            .authors
            .create_with_books(&author.name, &author.books)
            .await?;
        tracing::info!(
            "Created author id={} with {} book(s)",
            created.id,
            author.books.len()
        );

        Ok(created)
    }

    /// Update an author's name
    pub async fn update(&self, id: i64, author: UpdateAuthor) -> AppResult<()> {
        author.validate()?;

        self.repository.authors.update(id, &author.name).await
    }

    /// Delete an author, cascading to its books
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.authors.delete(id).await?;
        tracing::info!("Deleted author id={} and its books", id);

        Ok(())
    }
}
