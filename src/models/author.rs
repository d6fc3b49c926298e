//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::book::BookSummary;

/// Author row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Author with its owned books, returned by the author detail endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorDetail {
    pub id: i64,
    pub name: String,
    pub books: Vec<BookSummary>,
}

/// Author shape embedded in a book's detail representation
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(min = 1, message = "'name' is required"))]
    pub name: String,
}

/// Update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(min = 1, message = "'name' is required"))]
    pub name: String,
}

/// Composite create request: an author together with its initial book titles
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthorWithBooks {
    #[validate(length(min = 1, message = "'name' is required"))]
    pub name: String,
    pub books: Vec<String>,
}
