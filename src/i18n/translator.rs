use super::{Dictionary, Language};
use crate::error::LocaleError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Why a lookup fell back to the key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissKind {
    /// Descent stopped at `segment`.
    Absent { segment: String },
    /// The key could not be split into segments.
    Malformed(LocaleError),
    /// The key resolved, but not to the shape the accessor needs.
    WrongShape { expected: &'static str },
}

/// A failed lookup, handed to a [`MissReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss<'a> {
    pub key: &'a str,
    pub language: Language,
    pub kind: MissKind,
}

/// Receives one call per failed lookup.
pub trait MissReporter: Send + Sync {
    fn report(&self, miss: &Miss<'_>);
}

/// Emits translation misses as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl MissReporter for TracingReporter {
    fn report(&self, miss: &Miss<'_>) {
        match &miss.kind {
            MissKind::Absent { segment } => tracing::warn!(
                key = miss.key,
                language = miss.language.code(),
                segment = segment.as_str(),
                "Translation missing for key: {}",
                miss.key
            ),
            MissKind::Malformed(error) => tracing::warn!(
                key = miss.key,
                language = miss.language.code(),
                "Error getting translation for key: {}: {}",
                miss.key,
                error
            ),
            MissKind::WrongShape { expected } => tracing::warn!(
                key = miss.key,
                language = miss.language.code(),
                expected = *expected,
                "Translation for key {} is not a {}",
                miss.key,
                expected
            ),
        }
    }
}

/// Outcome of an untyped lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Found(&'a Value),
    /// The lookup failed; carries the original key path as a visible placeholder.
    Missing(String),
}

impl Resolved<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolved::Found(_))
    }

    /// The resolved value, or the key path as a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Resolved::Found(value) => value.clone(),
            Resolved::Missing(key) => Value::String(key),
        }
    }
}

/// A read-only view of the dictionary under one language.
///
/// Obtained from [`LanguageContext::translator`]; a new translator must be
/// taken after the language changes.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    dictionary: &'a Dictionary,
    language: Language,
    reporter: &'a dyn MissReporter,
}

impl<'a> Translator<'a> {
    pub fn new(
        dictionary: &'a Dictionary,
        language: Language,
        reporter: &'a dyn MissReporter,
    ) -> Self {
        Self {
            dictionary,
            language,
            reporter,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves a dot-separated key path as-is.
    ///
    /// Object members are matched by name and sequence elements by decimal
    /// index. A missing segment or a malformed key reports exactly one
    /// diagnostic and yields [`Resolved::Missing`] carrying the key.
    pub fn resolve(&self, key: &str) -> Resolved<'a> {
        match self.descend(key) {
            Ok(Some(value)) => Resolved::Found(value),
            Ok(None) => Resolved::Missing(key.to_string()),
            Err(error) => {
                self.report(key, MissKind::Malformed(error));
                Resolved::Missing(key.to_string())
            }
        }
    }

    /// A string leaf. Falls back to the key path.
    pub fn text(&self, key: &str) -> String {
        match self.resolve(key) {
            Resolved::Found(Value::String(text)) => text.clone(),
            Resolved::Found(_) => {
                self.report(key, MissKind::WrongShape { expected: "string" });
                key.to_string()
            }
            Resolved::Missing(key) => key,
        }
    }

    /// A sequence of strings. Falls back to a one-element list holding the key path.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.resolve(key) {
            Resolved::Found(Value::Array(items)) => {
                let texts: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                texts.unwrap_or_else(|| {
                    self.report(key, MissKind::WrongShape { expected: "list of strings" });
                    vec![key.to_string()]
                })
            }
            Resolved::Found(_) => {
                self.report(key, MissKind::WrongShape { expected: "list of strings" });
                vec![key.to_string()]
            }
            Resolved::Missing(key) => vec![key],
        }
    }

    /// A sequence of structured entries. Falls back to an empty list.
    pub fn items<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.resolve(key) {
            Resolved::Found(value) if value.is_array() => {
                serde_json::from_value(value.clone()).unwrap_or_else(|_| {
                    self.report(key, MissKind::WrongShape { expected: "list of entries" });
                    Vec::new()
                })
            }
            Resolved::Found(_) => {
                self.report(key, MissKind::WrongShape { expected: "list of entries" });
                Vec::new()
            }
            Resolved::Missing(_) => Vec::new(),
        }
    }

    /// A nested object, for callers that walk a section themselves.
    pub fn section(&self, key: &str) -> Option<&'a serde_json::Map<String, Value>> {
        match self.resolve(key) {
            Resolved::Found(Value::Object(map)) => Some(map),
            Resolved::Found(_) => {
                self.report(key, MissKind::WrongShape { expected: "object" });
                None
            }
            Resolved::Missing(_) => None,
        }
    }

    fn descend(&self, key: &str) -> Result<Option<&'a Value>, LocaleError> {
        if key.is_empty() {
            return Err(LocaleError::MalformedKey {
                key: key.to_string(),
                reason: "key is empty",
            });
        }
        if key.split('.').any(str::is_empty) {
            return Err(LocaleError::MalformedKey {
                key: key.to_string(),
                reason: "key contains an empty segment",
            });
        }

        let Some(mut current) = self.dictionary.root(self.language) else {
            self.report(
                key,
                MissKind::Absent {
                    segment: self.language.code().to_string(),
                },
            );
            return Ok(None);
        };

        for segment in key.split('.') {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => {
                    self.report(
                        key,
                        MissKind::Absent {
                            segment: segment.to_string(),
                        },
                    );
                    return Ok(None);
                }
            }
        }
        Ok(Some(current))
    }

    fn report(&self, key: &str, kind: MissKind) {
        self.reporter.report(&Miss {
            key,
            language: self.language,
            kind,
        });
    }
}

/// The process-wide language selection, passed explicitly to renderers.
///
/// [`LanguageContext::toggle_language`] is the only way to change the active
/// language once the context exists.
#[derive(Clone)]
pub struct LanguageContext {
    dictionary: Arc<Dictionary>,
    language: Language,
    reporter: Arc<dyn MissReporter>,
}

impl LanguageContext {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            language: Language::default(),
            reporter: Arc::new(TracingReporter),
        }
    }

    /// A context over the compiled-in catalog.
    pub fn builtin() -> Result<Self, LocaleError> {
        Ok(Self::new(Dictionary::builtin()?))
    }

    /// Starts in `language` instead of the primary language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn MissReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Flips between the two supported languages and returns the new one.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        tracing::debug!(language = self.language.code(), "Language toggled");
        self.language
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.dictionary, self.language, self.reporter.as_ref())
    }
}
