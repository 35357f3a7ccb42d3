//! # Folio - Portfolio Content and Animation Engine
//!
//! **Folio** is the behavioral core of a personal portfolio site. It resolves every
//! user-facing string from a bilingual catalog, drives the animated "API request
//! lifecycle" and "ETL pipeline" illustrations, and forwards contact-form messages
//! to a hosted email service. Rendering is left to whatever front end consumes it.
//!
//! ## Core Workflow
//!
//! 1.  **Create a Language Context**: `LanguageContext::builtin()` loads the compiled-in
//!     English and Polish catalogs. Pass it (or its `Translator`) to anything that renders text.
//! 2.  **Build a Sequencer**: `animation::api::sequencer()` or `animation::etl::sequencer()`
//!     return a ready `Sequencer` for each illustration.
//! 3.  **Drive it**: feed a logical clock through `Sequencer::advance_to`, or hand the
//!     sequencer to `SequencerDriver::spawn` to run it on a tokio timer.
//! 4.  **Render**: `Frame::render` resolves the current step under the active language.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut context = LanguageContext::builtin()?;
//!     let mut sequencer = folio::animation::api::sequencer()?;
//!
//!     // Arm the first tick at t = 0, then let 4.5 seconds pass.
//!     sequencer.start(0);
//!     sequencer.advance_to(4_500);
//!
//!     let frame = Frame::render(&sequencer, &context.translator());
//!     println!("{}", frame.title()); // "Validation"
//!
//!     // Switching language never touches the sequencer.
//!     context.toggle_language();
//!     let frame = Frame::render(&sequencer, &context.translator());
//!     println!("{}", frame.title()); // "Walidacja"
//!
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod prelude;
pub mod sequencer;
