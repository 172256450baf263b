use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("NotFound: item {0}")]
    NotFound(i64),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        let err = StoreError::NotFound(7);
        assert_eq!(err.to_string(), "NotFound: item 7");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
