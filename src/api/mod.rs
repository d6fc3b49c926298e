//! API handlers for the Libris REST endpoints

pub mod authors;
pub mod books;
pub mod home;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by the create, update and delete endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
