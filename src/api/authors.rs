//! Author management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetail, CreateAuthor, CreateAuthorWithBooks, UpdateAuthor},
};

use super::MessageResponse;

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = [Author])
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Get author details by ID, including its books
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorDetail),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AuthorDetail>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = MessageResponse),
        (status = 400, description = "Missing or empty name")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    WithRejection(Json(author), _): WithRejection<Json<CreateAuthor>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let created = state.services.authors.create(author).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Author '{}' created successfully.",
            created.name
        ))),
    ))
}

/// Create an author together with its initial books
#[utoipa::path(
    post,
    path = "/authors_with_books",
    tag = "authors",
    request_body = CreateAuthorWithBooks,
    responses(
        (status = 201, description = "Author and books created", body = MessageResponse),
        (status = 400, description = "Missing name or books")
    )
)]
pub async fn create_author_with_books(
    State(state): State<crate::AppState>,
    WithRejection(Json(author), _): WithRejection<Json<CreateAuthorWithBooks>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let created = state.services.authors.create_with_books(author).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Author '{}' with books added successfully.",
            created.name
        ))),
    ))
}

/// Update an author's name
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = MessageResponse),
        (status = 400, description = "Missing or empty name"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(author), _): WithRejection<Json<UpdateAuthor>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.authors.update(id, author).await?;

    Ok(Json(MessageResponse::new(format!(
        "Author with ID {} updated successfully.",
        id
    ))))
}

/// Delete an author and all of its books
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.authors.delete(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Author with ID {} deleted.",
        id
    ))))
}
