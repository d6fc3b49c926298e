//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::author::AuthorSummary;

/// Book row as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
}

/// Book with its owning author, returned by the book detail endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetail {
    pub id: i64,
    pub title: String,
    pub author: AuthorSummary,
}

/// Book shape embedded in an author's detail representation
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "'title' is required"))]
    pub title: String,
    pub author_id: i64,
}

/// Update book request; at least one field must be present
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "'title' must be non-empty"))]
    pub title: Option<String>,
    pub author_id: Option<i64>,
}
