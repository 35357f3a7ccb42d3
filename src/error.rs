use thiserror::Error;

/// Errors raised while building or querying a localization catalog.
///
/// Lookups never surface these to callers; the translator catches them,
/// reports a diagnostic and falls back to the key path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Malformed translation key '{key}': {reason}")]
    MalformedKey { key: String, reason: &'static str },

    #[error("Failed to parse the '{language}' catalog: {message}")]
    Catalog { language: String, message: String },

    #[error("Catalog root for '{0}' must be a JSON object")]
    CatalogRoot(String),
}

/// Errors that can occur when constructing a step sequencer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("A sequencer needs at least one step")]
    NoSteps,

    #[error("The uniform tick interval must be greater than zero")]
    ZeroInterval,

    #[error("Step '{0}' declares a zero duration, which a per-step policy cannot schedule")]
    ZeroDuration(String),
}

/// Errors produced while validating or submitting the contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact field '{field}' is invalid: {message}")]
    InvalidField {
        field: &'static str,
        message: &'static str,
    },

    #[error("The email service is not configured")]
    NotConfigured,

    #[error("Email transport failed: {0}")]
    Transport(String),

    #[error("Email service answered with status {0}")]
    Status(u16),
}

/// Errors raised while reading site configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base path '{0}' must start with '/'")]
    InvalidBasePath(String),
}
