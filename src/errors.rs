use thiserror::Error;

/// Errors produced by the charge and payment operations and by service startup.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Any failure reported by `SeaORM` or the underlying `SQLite` driver
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No charge exists for the requested unit and period
    #[error("Charge not found for unit {unit_id} in period {period}")]
    ChargeNotFound {
        /// Unit the payment was registered for
        unit_id: i64,
        /// Period label the payment was registered for
        period: String,
    },

    /// A stored period label is not of the form `YYYY-MM`
    #[error("Invalid period '{period}': expected YYYY-MM")]
    InvalidPeriod {
        /// The offending label
        period: String,
    },

    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
