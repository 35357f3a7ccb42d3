use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const BASE_PATH_VAR: &str = "FOLIO_BASE_PATH";
pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

pub const DEFAULT_BASE_PATH: &str = "/portfolio_v2/";

/// Identifiers of the hosted email service. Treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Build/runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_path: String,
    /// Present only when all three email identifiers are set.
    pub email: Option<EmailConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            email: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut base_path = read(BASE_PATH_VAR).unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        if !base_path.starts_with('/') {
            return Err(ConfigError::InvalidBasePath(base_path));
        }
        if !base_path.ends_with('/') {
            base_path.push('/');
        }

        let email = match (
            read(SERVICE_ID_VAR),
            read(TEMPLATE_ID_VAR),
            read(PUBLIC_KEY_VAR),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailConfig {
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        Ok(Self { base_path, email })
    }

    /// Joins the base path and an asset path, dropping the asset's leading `/`.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path.trim_start_matches('/'))
    }
}
