use thiserror::Error;

/// Errors raised while loading application configuration
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid setting {setting_name}: {reason}")]
    InvalidSetting {
        setting_name: String,
        reason: String,
    },
}

impl ApplicationError {
    pub fn invalid_setting(setting_name: &str, reason: impl Into<String>) -> Self {
        ApplicationError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: reason.into(),
        }
    }
}
