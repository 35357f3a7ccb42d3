//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the folio crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let context = LanguageContext::builtin()?;
//! let translator = context.translator();
//!
//! assert_eq!(translator.text("nav.about"), "About");
//! assert_eq!(translator.text("nav.nowhere"), "nav.nowhere");
//! # Ok(())
//! # }
//! ```

// Localization
pub use crate::i18n::{Dictionary, Language, LanguageContext, MissReporter, Resolved, Translator};

// Sequencing
pub use crate::sequencer::driver::{Command, DriverHandle, SequencerDriver};
pub use crate::sequencer::{
    Challenge, ChallengeSource, Phase, RandomChallenges, Sequencer, Snapshot, Step, TickPolicy,
};

// Views
pub use crate::animation::{Controls, Frame};

// Contact form
pub use crate::contact::{ContactController, ContactForm, EmailTransport, SubmitStatus};

// Configuration
pub use crate::config::{EmailConfig, SiteConfig};

// Error types
pub use crate::error::{ConfigError, ContactError, LocaleError, SequencerError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
