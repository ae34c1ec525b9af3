//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a `ConfigError`, if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_listeners(config, &mut result);
        Self::validate_database(config, &mut result);
        Self::validate_say(config, &mut result);

        Ok(result)
    }

    fn validate_listeners(config: &Config, result: &mut ValidationResult) {
        let listeners = [
            ("server", &config.server.host, config.server.port),
            ("echo", &config.echo.host, config.echo.port),
        ];
        for (section, host, port) in listeners {
            if port == 0 {
                result.add_error(ValidationError::new(
                    format!("{}.port", section),
                    "Port cannot be 0",
                ));
            }
            if host.is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.host", section),
                    "Host cannot be empty",
                ));
            }
        }

        if config.server.host == config.echo.host && config.server.port == config.echo.port {
            result.add_warning(ValidationWarning::new(
                "echo.port",
                "Echo function shares the API address, the two cannot run side by side",
            ));
        }
    }

    fn validate_database(config: &Config, result: &mut ValidationResult) {
        if config.database.path.trim().is_empty() {
            result.add_error(ValidationError::new(
                "database.path",
                "Database path cannot be empty",
            ));
        }

        if config.database.pool_size == 0 {
            result.add_error(ValidationError::new(
                "database.pool_size",
                "pool_size must be greater than 0",
            ));
        }

        if config.database.pool_size > 64 {
            result.add_warning(ValidationWarning::new(
                "database.pool_size",
                "pool_size is very high (>64), SQLite serializes writers anyway",
            ));
        }
    }

    fn validate_say(config: &Config, result: &mut ValidationResult) {
        let url = &config.say.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "say.url",
                "url must start with http:// or https://",
            ));
            return;
        }
        if let Err(e) = url::Url::parse(url) {
            result.add_error(ValidationError::new("say.url", format!("Invalid URL: {}", e)));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
