//! The contact form and its submission flow.

use crate::config::EmailConfig;
use crate::error::ContactError;
use crate::i18n::Translator;
use serde::{Deserialize, Serialize};

mod transport;

pub use transport::*;

/// The three fields the visitor fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Rejects blank fields and an email address without `@`.
    pub fn validate(&self) -> Result<(), ContactError> {
        let blank = |value: &str| value.trim().is_empty();
        if blank(&self.name) {
            return Err(ContactError::InvalidField {
                field: "name",
                message: "must not be empty",
            });
        }
        if blank(&self.email) {
            return Err(ContactError::InvalidField {
                field: "email",
                message: "must not be empty",
            });
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidField {
                field: "email",
                message: "must contain '@'",
            });
        }
        if blank(&self.message) {
            return Err(ContactError::InvalidField {
                field: "message",
                message: "must not be empty",
            });
        }
        Ok(())
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// What the form shows under the send button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success(String),
    Error { message: String, cause: ContactError },
}

impl SubmitStatus {
    /// The localized message to display, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Success(message) | SubmitStatus::Error { message, .. } => {
                Some(message.as_str())
            }
            SubmitStatus::Idle => None,
        }
    }
}

/// Owns the form state and submits it through an [`EmailTransport`].
pub struct ContactController<T> {
    transport: T,
    config: Option<EmailConfig>,
    form: ContactForm,
    status: SubmitStatus,
}

impl<T: EmailTransport> ContactController<T> {
    pub fn new(transport: T, config: Option<EmailConfig>) -> Self {
        Self {
            transport,
            config,
            form: ContactForm::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Sends the form once.
    ///
    /// Only a 200 answer counts as success, after which the form is cleared.
    /// Any other outcome keeps the entered values so the visitor can resend.
    pub async fn submit(&mut self, translator: &Translator<'_>) -> &SubmitStatus {
        self.status = match self.deliver().await {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.form = ContactForm::default();
                SubmitStatus::Success(translator.text("contact.form.successMessage"))
            }
            Err(cause) => {
                tracing::error!(error = %cause, "Error sending message");
                SubmitStatus::Error {
                    message: translator.text("contact.form.errorMessage"),
                    cause,
                }
            }
        };
        &self.status
    }

    async fn deliver(&self) -> Result<(), ContactError> {
        self.form.validate()?;
        let config = self.config.as_ref().ok_or(ContactError::NotConfigured)?;
        match self
            .transport
            .send(config, &self.form.template_params())
            .await?
        {
            200 => Ok(()),
            status => Err(ContactError::Status(status)),
        }
    }
}
