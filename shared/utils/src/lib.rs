pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.extraction.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.extraction.allowed_file_types, vec!["pdf"]);
    }

    #[test]
    fn test_error_handling() {
        let error = AcademeError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);

        let error = AcademeError::document_processing("unreadable");
        assert_eq!(error.http_status_code(), 422);
    }
}
