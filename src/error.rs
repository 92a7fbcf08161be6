use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<oso::OsoError> for Error {
    fn from(err: oso::OsoError) -> Self {
        authz_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // codes 1..=99 are internal faults and render opaque
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            100 => (StatusCode::CONFLICT, self.message.as_str()),
            102 => (StatusCode::NOT_FOUND, self.message.as_str()),
            103 => (StatusCode::FORBIDDEN, self.message.as_str()),
            104 => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn validation_error(message: &str) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 102,
        message: "not found".into(),
    }
}

pub fn forbidden_error() -> Error {
    Error {
        code: 103,
        message: "forbidden".into(),
    }
}

pub fn unauthenticated_error() -> Error {
    Error {
        code: 104,
        message: "unauthenticated".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn authz_error<T: Debug>(_: T) -> Error {
    Error {
        code: 3,
        message: "authorization engine error".into(),
    }
}

pub fn config_error<T: Debug>(_: T) -> Error {
    Error {
        code: 4,
        message: "configuration error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_codes_render_opaque() {
        let response = database_error("connection reset").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_codes_map_to_statuses() {
        assert_eq!(
            invalid_state_error().into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            validation_error("cost must be positive")
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            not_found_error().into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            forbidden_error().into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            unauthenticated_error().into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
