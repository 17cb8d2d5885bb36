use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MSG_CONFIGURATION: &str = "API 키가 구성되지 않았습니다. 관리자에게 문의하세요.";
pub const MSG_INVALID_INPUT: &str = "토론 주제와 주장을 모두 입력해주세요.";
pub const MSG_UPSTREAM: &str = "검색 중 오류가 발생했습니다. 다시 시도해주세요.";
pub const MSG_NO_CONTENT: &str = "유효한 검색 결과를 찾을 수 없습니다.";
pub const MSG_INTERNAL: &str = "서버 오류가 발생했습니다. 다시 시도해주세요.";

/// Everything that can fail a search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("provider API key is not configured")]
    Configuration,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("provider responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("provider returned no content")]
    NoContent,

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn status(&self) -> StatusCode {
        match self {
            SearchError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SearchError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            SearchError::NoContent => StatusCode::NOT_FOUND,
            SearchError::Transport(_) | SearchError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The short message shown to the user. Internal detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Configuration => MSG_CONFIGURATION,
            SearchError::InvalidInput(_) => MSG_INVALID_INPUT,
            SearchError::Upstream { .. } => MSG_UPSTREAM,
            SearchError::NoContent => MSG_NO_CONTENT,
            SearchError::Transport(_) | SearchError::Decode(_) => MSG_INTERNAL,
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(target: "api", "search failed: {:#}", self);
        }
        (status, Json(serde_json::json!({ "error": self.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            SearchError::Configuration.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SearchError::InvalidInput("topic".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(SearchError::NoContent.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            SearchError::Upstream {
                status: 429,
                body: String::new()
            }
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            SearchError::Upstream {
                status: 42,
                body: String::new()
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
