use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB operations
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Percentage computation against a zero index total; callers skip
    /// percentage rendering when no collection reported any index bytes
    #[error("Division by zero: total index size is zero")]
    DivisionByZero,
}

/// MongoDB driver error types
#[derive(Error, Debug)]
pub enum MongoError {
    /// Failed to establish a connection to the MongoDB server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Credentials rejected by the server
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A database command (collStats, listIndexes, ...) failed
    #[error("Command failed: {code_name}: {message}")]
    CommandFailed { code_name: String, message: String },

    /// The server returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for MongoDB operations
pub type MongoResult<T> = Result<T, MongoError>;

impl From<mongodb::error::Error> for MongoError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match err.kind.as_ref() {
            ErrorKind::Authentication { message, .. } => {
                MongoError::AuthenticationFailed(message.clone())
            }
            ErrorKind::Command(command_error) => MongoError::CommandFailed {
                code_name: command_error.code_name.clone(),
                message: command_error.message.clone(),
            },
            ErrorKind::ServerSelection { message, .. } => {
                MongoError::ConnectionFailed(message.clone())
            }
            ErrorKind::Io(io_err) => MongoError::ConnectionFailed(io_err.to_string()),
            other => MongoError::InvalidResponse(format!("{:?}", other)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
