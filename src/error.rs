use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use log::error;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error("Movie not found")]
    NotFound,

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Io(_) | Error::Parse(_) | Error::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Error::Io(_) | Error::Parse(_) | Error::Poisoned => {
                error!("{}", self);
                "Catalog storage unavailable".to_owned()
            }
            _ => self.to_string(),
        };
        let mut response = HttpResponse::build(self.status_code());
        if let Error::Unauthorized = self {
            response.insert_header((header::WWW_AUTHENTICATE, "Basic"));
        }
        response.json(Detail { detail: &message })
    }
}
