use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IntervalError {
    #[error("Inverted interval: start ({start}) is greater than end ({end})")]
    Inverted { start: String, end: String },

    #[error("Error parsing interval: {0}")]
    ParseError(String),
}

pub type IntervalResult<T> = std::result::Result<T, IntervalError>;
