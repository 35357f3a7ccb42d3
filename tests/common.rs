//! Common test utilities for building catalogs, step rings and fake transports.
use folio::contact::TemplateParams;
use folio::i18n::{Miss, MissKind};
use folio::prelude::*;
use std::sync::{Arc, Mutex};

/// Records every translation miss instead of logging it.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingReporter {
    misses: Mutex<Vec<(String, MissKind)>>,
}

#[allow(dead_code)]
impl CountingReporter {
    pub fn count(&self) -> usize {
        self.misses.lock().unwrap().len()
    }

    pub fn keys(&self) -> Vec<String> {
        self.misses
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn kinds(&self) -> Vec<MissKind> {
        self.misses
            .lock()
            .unwrap()
            .iter()
            .map(|(_, kind)| kind.clone())
            .collect()
    }
}

impl MissReporter for CountingReporter {
    fn report(&self, miss: &Miss<'_>) {
        self.misses
            .lock()
            .unwrap()
            .push((miss.key.to_string(), miss.kind.clone()));
    }
}

/// The built-in catalog with a counting reporter attached.
#[allow(dead_code)]
pub fn counted_context() -> (LanguageContext, Arc<CountingReporter>) {
    let reporter = Arc::new(CountingReporter::default());
    let context = LanguageContext::builtin()
        .expect("built-in catalog must parse")
        .with_reporter(reporter.clone());
    (context, reporter)
}

/// A two-language catalog where Polish lacks `only.en`.
#[allow(dead_code)]
pub fn divergent_dictionary() -> Dictionary {
    Dictionary::from_json(&[
        (
            Language::En,
            r#"{ "greeting": "Hello", "only": { "en": "English only" }, "tags": ["a", "b"] }"#,
        ),
        (Language::Pl, r#"{ "greeting": "Cześć", "tags": ["a", "b"] }"#),
    ])
    .expect("test catalog must parse")
}

/// Four steps of one second each, labelled A to D.
#[allow(dead_code)]
pub fn scenario_steps() -> Vec<Step> {
    ["a", "b", "c", "d"]
        .into_iter()
        .map(|id| {
            Step::new(
                id.to_uppercase(),
                format!("demo.{id}.title"),
                format!("demo.{id}.description"),
                1000,
            )
        })
        .collect()
}

#[allow(dead_code)]
pub fn email_config() -> EmailConfig {
    EmailConfig {
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: "public_test".to_string(),
    }
}

/// Answers every send with a fixed outcome and records what it was asked to send.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FakeTransport {
    outcome: std::result::Result<u16, ContactError>,
    pub sent: Arc<Mutex<Vec<TemplateParams>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn answering(status: u16) -> Self {
        Self {
            outcome: Ok(status),
            sent: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(ContactError::Transport(message.to_string())),
            sent: Arc::default(),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl EmailTransport for FakeTransport {
    async fn send(
        &self,
        _config: &EmailConfig,
        params: &TemplateParams,
    ) -> std::result::Result<u16, ContactError> {
        self.sent.lock().unwrap().push(params.clone());
        self.outcome.clone()
    }
}
