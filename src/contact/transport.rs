use crate::config::EmailConfig;
use crate::error::ContactError;
use serde::Serialize;
use std::future::Future;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Template variables the email template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Delivers a contact message to a hosted email service.
pub trait EmailTransport {
    /// Sends one message and returns the HTTP status the service answered with.
    ///
    /// `Err` is reserved for failures before a status was received.
    fn send(
        &self,
        config: &EmailConfig,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<u16, ContactError>> + Send;
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// [`EmailTransport`] for the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for EmailJsTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailJsTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmailTransport for EmailJsTransport {
    async fn send(
        &self,
        config: &EmailConfig,
        params: &TemplateParams,
    ) -> Result<u16, ContactError> {
        let payload = EmailJsPayload {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
