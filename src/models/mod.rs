//! Data models for authors and books

pub mod author;
pub mod book;

pub use author::{Author, AuthorDetail, AuthorSummary, CreateAuthor, CreateAuthorWithBooks, UpdateAuthor};
pub use book::{Book, BookDetail, BookSummary, CreateBook, UpdateBook};
