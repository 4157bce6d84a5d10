use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header: {0}")]
    Header(String),

    #[error("Headers already sent")]
    HeadersSent,

    #[error("Status already written")]
    StatusWritten,
}

impl From<http::header::InvalidHeaderName> for CourierError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        CourierError::Header(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for CourierError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        CourierError::Header(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
