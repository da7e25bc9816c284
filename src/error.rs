use thiserror::Error;

/// Event Pulse application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid reservation name: {name:?}")]
    InvalidReservationName { name: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Application error: {message}")]
    Application { message: String },
}

impl Error {
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    pub fn invalid_reservation_name(name: impl Into<String>) -> Self {
        Self::InvalidReservationName { name: name.into() }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reservation_name_message_quotes_the_name() {
        let error = Error::invalid_reservation_name("josh");
        assert_eq!(error.to_string(), "Invalid reservation name: \"josh\"");
    }

    #[test]
    fn test_malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[server]\nport = \"high\"\n").unwrap();

        let result: Result<crate::config::Settings> =
            crate::config::Settings::load_from(dir.path()).map_err(Error::from);

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
