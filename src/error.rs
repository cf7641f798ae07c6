use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("connection: {message}")]
    Connection { message: String },

    #[error("query: {message}")]
    Query { message: String },

    #[error("timeout: no response after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("config: {message}")]
    Config { message: String },

    #[error("empty result: query returned no rows")]
    EmptyResult,

    #[error("non-numeric value: cannot read {value:?} as a number")]
    NonNumericValue { value: String },

    #[error("expression: {message}")]
    Expression { message: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
