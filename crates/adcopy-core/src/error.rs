//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdcopyError {
    #[error("BRIEF/{0}")]
    InvalidBrief(String),

    #[error("TEMPLATE/{0}")]
    Template(String),

    #[error("PROVIDER/{0}")]
    Provider(String),

    #[error("CAMPAIGN/{0}")]
    Campaign(String),

    #[error("CONFIG/{0}")]
    Config(String),
}

impl AdcopyError {
    /// Short machine code, used as the `code` field of API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBrief(_) => "INVALID_BRIEF",
            Self::Template(_) => "TEMPLATE_ERROR",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Campaign(_) => "INVALID_CAMPAIGN",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let err = AdcopyError::InvalidBrief("product name is required".to_string());
        assert_eq!(err.to_string(), "BRIEF/product name is required");
        assert_eq!(err.code(), "INVALID_BRIEF");
    }
}
