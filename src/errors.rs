// errors.rs
use crate::domain::CatalogError;
use crate::query::QueryError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, catalog).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Internal Server Error")]
    InternalError,
}

// Query errors only reach the server when a handler builds a filter by hand;
// that is a caller bug from the client's point of view.
impl From<QueryError> for ServerError {
    fn from(e: QueryError) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DbError(_) | ServerError::Catalog(_) | ServerError::InternalError => 500,
        }
    }
}
