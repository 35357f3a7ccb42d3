mod common;
use common::*;

use folio::content::Project;
use folio::i18n::MissKind;
use folio::prelude::*;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_builtin_catalog_coverage_is_complete() {
    let dictionary = Dictionary::builtin().unwrap();
    let report = dictionary.coverage();

    assert!(report.is_complete(), "missing paths: {:?}", report.missing);
    assert!(report.total_paths > 100);
    assert_eq!(
        dictionary.key_paths(Language::En),
        dictionary.key_paths(Language::Pl)
    );
}

#[test]
fn test_every_key_path_resolves_in_every_language() {
    let (mut context, reporter) = counted_context();
    let paths = context.dictionary().key_paths(Language::En);

    for _ in Language::ALL {
        let translator = context.translator();
        for path in &paths {
            let resolved = translator.resolve(path);
            assert!(
                resolved.is_found(),
                "'{}' missing in {}",
                path,
                translator.language()
            );
            if let Resolved::Found(serde_json::Value::String(text)) = resolved {
                assert_ne!(text, path);
            }
        }
        context.toggle_language();
    }

    assert_eq!(reporter.count(), 0);
}

#[test]
fn test_missing_key_falls_back_and_reports_once() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    assert_eq!(translator.text("nav.nowhere"), "nav.nowhere");
    assert_eq!(reporter.count(), 1);
    assert_eq!(
        reporter.kinds()[0],
        MissKind::Absent {
            segment: "nowhere".to_string()
        }
    );

    // Descending past a string leaf is also a miss.
    assert_eq!(
        translator.resolve("nav.about.deeper"),
        Resolved::Missing("nav.about.deeper".to_string())
    );
    assert_eq!(reporter.count(), 2);
    assert_eq!(reporter.keys(), vec!["nav.nowhere", "nav.about.deeper"]);
}

#[test]
fn test_malformed_keys_fall_back_and_report_once_each() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    for key in ["", "nav..about", "nav.", ".nav"] {
        assert_eq!(translator.text(key), key);
    }

    assert_eq!(reporter.count(), 4);
    assert!(
        reporter
            .kinds()
            .iter()
            .all(|kind| matches!(kind, MissKind::Malformed(LocaleError::MalformedKey { .. })))
    );
}

#[test]
fn test_text_on_non_string_reports_wrong_shape() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    assert_eq!(translator.text("nav"), "nav");
    assert_eq!(reporter.count(), 1);
    assert_eq!(
        reporter.kinds()[0],
        MissKind::WrongShape { expected: "string" }
    );
}

#[test]
fn test_array_elements_are_addressed_by_index() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    assert_eq!(translator.text("projects.items.0.title"), "DDMRP Dashboard");
    assert_eq!(translator.text("skills.categories.tools.items.1"), "Git");
    assert_eq!(translator.text("projects.items.9.title"), "projects.items.9.title");
    assert_eq!(translator.text("projects.items.first"), "projects.items.first");
    assert_eq!(reporter.count(), 2);
}

#[test]
fn test_list_accessor_and_fallback() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    let paragraphs = translator.list("about.description");
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(reporter.count(), 0);

    assert_eq!(translator.list("about.nowhere"), vec!["about.nowhere"]);
    assert_eq!(translator.list("nav.about"), vec!["nav.about"]);
    // A sequence of objects is not a list of strings.
    assert_eq!(translator.list("projects.items"), vec!["projects.items"]);
    assert_eq!(reporter.count(), 3);
}

#[test]
fn test_items_accessor_and_fallback() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    let projects: Vec<Project> = translator.items("projects.items");
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[1].title, "Supply Chain Analytics Platform");
    assert_eq!(projects[1].fallback_image.as_deref(), Some("box.jpg"));

    assert!(translator.items::<Project>("projects.nowhere").is_empty());
    assert!(translator.items::<Project>("nav").is_empty());
    assert_eq!(reporter.count(), 2);
}

#[test]
fn test_section_accessor() {
    let (context, reporter) = counted_context();
    let translator = context.translator();

    let nav = translator.section("nav").unwrap();
    assert!(nav.contains_key("about"));
    assert!(translator.section("nav.about").is_none());
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_toggle_language_changes_subsequent_lookups() {
    let (mut context, _) = counted_context();
    assert_eq!(context.language(), Language::En);
    assert_eq!(context.translator().text("nav.about"), "About");

    assert_eq!(context.toggle_language(), Language::Pl);
    assert_eq!(context.translator().text("nav.about"), "O mnie");

    assert_eq!(context.toggle_language(), Language::En);
    assert_eq!(context.translator().text("nav.about"), "About");
}

#[test]
fn test_with_language_starts_in_that_language() {
    let context = LanguageContext::builtin()
        .unwrap()
        .with_language(Language::Pl);
    assert_eq!(
        context.translator().text("animation.steps.validation.title"),
        "Walidacja"
    );
}

#[test]
fn test_divergent_catalog_is_reported_and_falls_back() {
    let dictionary = divergent_dictionary();
    let report = dictionary.coverage();

    assert!(!report.is_complete());
    assert_eq!(report.total_paths, 3);
    assert_eq!(report.missing_for(Language::Pl), ["only.en".to_string()]);
    assert!(report.missing_for(Language::En).is_empty());

    let reporter = Arc::new(CountingReporter::default());
    let context = LanguageContext::new(Arc::new(dictionary))
        .with_language(Language::Pl)
        .with_reporter(reporter.clone());

    assert_eq!(context.translator().text("greeting"), "Cześć");
    assert_eq!(context.translator().text("only.en"), "only.en");
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_language_without_tree_falls_back() {
    let dictionary =
        Dictionary::from_values([(Language::En, json!({ "greeting": "Hello" }))]).unwrap();
    let languages: Vec<Language> = dictionary.languages().collect();
    assert_eq!(languages, vec![Language::En]);

    let reporter = CountingReporter::default();
    let translator = Translator::new(&dictionary, Language::Pl, &reporter);
    assert_eq!(translator.text("greeting"), "greeting");
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let err = Dictionary::from_json(&[(Language::En, "{ not json")]).unwrap_err();
    assert!(matches!(err, LocaleError::Catalog { ref language, .. } if language == "en"));

    let err = Dictionary::from_json(&[(Language::Pl, r#"["a", "b"]"#)]).unwrap_err();
    assert_eq!(err, LocaleError::CatalogRoot("pl".to_string()));
}
