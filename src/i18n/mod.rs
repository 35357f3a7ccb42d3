//! Localized content resolution.
//!
//! A [`Dictionary`] holds one JSON tree per [`Language`]. A [`LanguageContext`]
//! owns the dictionary together with the active language and hands out
//! [`Translator`]s, which resolve dot-separated key paths such as
//! `animation.steps.request.title`. Missing keys never fail: the key path
//! itself is returned so gaps stay visible on screen, and a diagnostic goes
//! to the context's [`MissReporter`].

mod dictionary;
mod language;
mod translator;

pub use dictionary::*;
pub use language::*;
pub use translator::*;
